#![forbid(unsafe_code)]

//! English console strings; same key set as `zh_cn`.

use console_i18n::StaticCatalog;

pub static EN_US: &StaticCatalog = &[
    (
        "SiderMenu",
        &[
            ("Overview", "Overview"),
            ("Configuration", "Configuration"),
            ("Search", "Search"),
            ("Explore", "Explore"),
            ("Monitoring", "Monitoring"),
            ("Dashboard", "Dashboard"),
            ("Metadata", "Metadata"),
            ("Replication", "Replication"),
            ("Request", "Request"),
            ("Log View", "Log View"),
            ("Database", "Database"),
            ("Logic Database", "Logic Database"),
            ("Storage", "Storage"),
            ("Broker", "Broker"),
            ("Multiple IDCs", "Multiple IDCs"),
        ],
    ),
    (
        "LayoutHeader",
        &[
            ("language", "English"),
        ],
    ),
    (
        "Overview",
        &[
            ("brokerLiveNodes", "Broker Live Nodes"),
        ],
    ),
    (
        "NodeView",
        &[
            ("hostIp", "Host IP"),
            ("hostName", "Host Name"),
            ("grpcPort", "GRPC Port"),
            ("httpPort", "HTTP Port"),
            ("title", "Host Information"),
            ("uptime", "Uptime"),
            ("version", "Version"),
            ("cpu", "CPU"),
            ("memory", "Memory"),
            ("nodeId", "Node ID"),
        ],
    ),
    (
        "StorageView",
        &[
            ("name", "Name(Namespace)"),
            ("nodeStatus", "Node Status"),
            ("numOfDatabase", "Num. Of Database"),
            ("replicationStatus", "Replication Status"),
            ("diskCapacityUsage", "Disk Capacity Usage"),
            ("storageClusterList", "Storage Cluster List"),
            ("totalOfReplication", "Total"),
            ("underReplicated", "Under-replicated"),
            ("unavailableReplica", "Unavailable"),
            ("aliveNodes", "Alive"),
            ("deadNodes", "Dead"),
            ("liveNodes", "Live Nodes"),
            ("databaseList", "Database List"),
        ],
    ),
    (
        "DatabaseView",
        &[
            ("name", "Name"),
            ("numOfShards", "Num. Of Shard"),
            ("replicaFactor", "Replica Factor"),
        ],
    ),
    (
        "CapacityView",
        &[
            ("total", "Total"),
            ("used", "Used"),
            ("free", "Free"),
        ],
    ),
    (
        "MasterView",
        &[
            ("master", "Master"),
            ("electTime", "Elect Time"),
        ],
    ),
    (
        "SearchView",
        &[
            ("database", "Database"),
            ("databaseRequired", "Please select database"),
            ("search", "Search"),
        ],
    ),
    (
        "DataExploreView",
        &[
            ("database", "Database"),
            ("namespace", "Namespace"),
            ("metric", "Metric"),
            ("showLinQL", "Show LinQL"),
            ("metricRequired", "Please select metric"),
            ("field", "Field"),
            ("filterBy", "Filter By"),
            ("groupBy", "Group By"),
        ],
    ),
    (
        "ReplicationView",
        &[
            ("database", "Database"),
            ("replicationStatus", "Replication Status"),
            ("shard", "Shard"),
            ("append", "Append"),
            ("consume", "Consume"),
            ("ack", "Ack"),
            ("lag", "Lag"),
            ("peer", "Peer"),
            ("type", "Type"),
            ("memoryDatabaseStatus", "Memory Database Status"),
            ("node", "Node"),
            ("state", "State"),
            ("uptime", "Uptime"),
            ("memSize", "Memory Size"),
            ("numOfMetrics", "Num. Of Metrics"),
            ("numOfSeries", "Num. Of Series"),
            ("noMemoryDatabase", "No active memory database"),
            ("replica", "Replica"),
            ("memoryDatabase", "Memory Database"),
        ],
    ),
    (
        "LogView",
        &[
            ("role", "Role"),
            ("storage", "Storage"),
            ("node", "Node"),
            ("file", "File"),
            ("size", "Size"),
        ],
    ),
    (
        "RequestView",
        &[
            ("timestamp", "Timestamp"),
            ("duration", "Duration"),
            ("linQL", "LinQL"),
            ("database", "Database"),
            ("broker", "Broker"),
            ("runLinQL", "Run LinQL"),
        ],
    ),
    (
        "MetadataExploreView",
        &[
            ("compare", "Compare"),
            ("comparing", "Comparing"),
            ("compareResult1", "Found"),
            ("compareResult2", "nodes, of which"),
            ("compareResult3", "nodes differ"),
            ("compareTooltip", "Compare with the state machine in memory"),
            ("compareResultTitle", "State Comparison Result"),
            ("compareResultDesc", "Compare the persisted state with the in-memory state machine"),
            ("filterNode", "Filter Node"),
        ],
    ),
    (
        "MetadataDatabaseView",
        &[
            ("name", "Name"),
            ("nameRequired", "Please input database name"),
            ("storage", "Storage"),
            ("storageRequired", "Please select storage"),
            ("description", "Description"),
            ("deleteConfirm1", "Are you sure you want to delete database [ "),
            ("deleteConfirm2", " ] ?"),
            ("numOfShards", "Num. Of Shard"),
            ("numOfShardsRequired", "Please input num. of shard"),
            ("replicaFactor", "Replica Factor"),
            ("replicaFactorRequired", "Please input replica factor"),
            ("engineOptions", "Engine Options"),
            ("autoCreateNS", "Auto Create Namespace"),
            ("intervals", "Intervals"),
            ("interval", "Interval(s)"),
            ("retention", "Retention(d)"),
            ("writeableTimeRange", "Writeable Time Range"),
            ("behead", "Behead"),
            ("ahead", "Ahead"),
            ("example", "Example: [ now()-1h ~ now()+1h ]"),
        ],
    ),
    (
        "MetadataLogicDatabaseView",
        &[
            ("name", "Name"),
            ("nameRequired", "Please input database name"),
            ("router", "Router"),
            ("tagKey", "Tag Key"),
            ("tagValues", "Tag Values"),
            ("brokers", "Brokers"),
            ("deleteConfirm1", "Are you sure you want to delete database [ "),
            ("deleteConfirm2", " ] ?"),
        ],
    ),
    (
        "MetadataClusterView",
        &[
            ("register", "Register"),
            ("name", "Name(Namespace)"),
            ("status", "Status"),
            ("configuration", "Configuration"),
            ("Ready", "Ready"),
            ("Initialize", "Initialize"),
            ("endpoints", "Endpoints(ETCD)"),
            ("username", "Username(ETCD)"),
            ("password", "Password(ETCD)"),
            ("dialTimeout", "Dial Timeout"),
            ("timeout", "Timeout"),
            ("timeoutTooltip", "Timeout for the client to process a request"),
            ("leaseTTL", "Lease(Time To Live)"),
        ],
    ),
    (
        "MetadataStorageView",
        &[
            ("recoverConfirmMessage", "Recover database config from the local storage of the storage cluster?"),
            ("recoverErrorTitle", "Recover database config failure"),
            ("recoverSuccessTitle", "Recover database config successfully"),
        ],
    ),
    (
        "LinSelectView",
        &[
            ("placeholder", "Please select"),
        ],
    ),
    (
        "TimePicker",
        &[
            ("from", "From"),
            ("to", "To"),
            ("searchQuickRange", "Search quick ranges"),
            ("applyTimeRange", "Apply time range"),
            ("absoluteTimeRange", "Absolute time range"),
            ("last15Min", "Last 15 minutes"),
            ("last30Min", "Last 30 minutes"),
            ("last1Hour", "Last 1 hour"),
            ("last3Hour", "Last 3 hours"),
            ("last6Hour", "Last 6 hours"),
            ("last12Hour", "Last 12 hours"),
            ("last1Day", "Last 1 day"),
            ("last2Day", "Last 2 days"),
            ("last3Day", "Last 3 days"),
            ("last7Day", "Last 7 days"),
            ("last15Day", "Last 15 days"),
            ("last30Day", "Last 30 days"),
            ("off", "Off"),
            ("10s", "10s"),
            ("30s", "30s"),
            ("1m", "1m"),
            ("5m", "5m"),
        ],
    ),
    (
        "Common",
        &[
            ("noData", "No data"),
            ("ok", "OK"),
            ("cancel", "Cancel"),
            ("submit", "Submit"),
            ("actions", "Actions"),
            ("create", "Create"),
            ("pleaseConfirm", "Please confirm"),
            ("unknownInternalError", "Unknown internal error"),
            ("loading", "Loading"),
        ],
    ),
];
