#![forbid(unsafe_code)]

//! The process-wide resolver lives in a `OnceLock`, so the whole lifecycle
//! is exercised in one test to keep ordering deterministic.

use std::sync::Arc;

use console_i18n::{Catalog, CatalogRegistry, I18nError, Params, Resolver, global};

fn resolver() -> Resolver {
    let en = Catalog::builder()
        .namespace("Common", [("ok", "OK"), ("noData", "No data")])
        .insert("RequestView", "summary", "{count} requests on {broker}")
        .build()
        .unwrap();
    let zh = Catalog::builder()
        .namespace("Common", [("ok", "确定")])
        .insert("RequestView", "summary", "{broker} 上共 {count} 个请求")
        .build()
        .unwrap();
    let registry = CatalogRegistry::new("en-US", en).unwrap();
    registry.register("zh-CN", zh).unwrap();
    Resolver::new(Arc::new(registry))
}

#[test]
fn global_lifecycle() {
    // Before install: placeholders, no panics.
    assert!(global::resolver().is_none());
    assert_eq!(global::tr("Common", "ok"), "Common.ok");
    assert_eq!(
        global::switch_locale("zh-CN").unwrap_err(),
        I18nError::UnknownLocale("zh-CN".into())
    );

    global::install(resolver()).unwrap();
    assert!(global::install(resolver()).is_err());

    assert_eq!(global::tr("Common", "ok"), "OK");
    global::switch_locale("zh-CN").unwrap();
    assert_eq!(global::tr("Common", "ok"), "确定");
    assert_eq!(global::tr("Common", "noData"), "No data");

    let params = Params::new().with("count", "3").with("broker", "broker-1");
    assert_eq!(
        global::tr_with("RequestView", "summary", &params),
        "broker-1 上共 3 个请求"
    );

    assert!(global::switch_locale("fr-FR").is_err());
    assert_eq!(global::resolver().unwrap().active_locale(), "zh-CN");
}
