//! Standard execution environments

use crate::environment::EnvironmentDefinition;

const ES2015_GLOBALS: &[&str] = &[
    "ArrayBuffer",
    "DataView",
    "Float32Array",
    "Float64Array",
    "Int16Array",
    "Int32Array",
    "Int8Array",
    "Map",
    "Promise",
    "Proxy",
    "Reflect",
    "Set",
    "Symbol",
    "Uint16Array",
    "Uint32Array",
    "Uint8Array",
    "Uint8ClampedArray",
    "WeakMap",
    "WeakSet",
];

const ES2017_GLOBALS: &[&str] = &["Atomics", "SharedArrayBuffer"];
const ES2020_GLOBALS: &[&str] = &["BigInt", "BigInt64Array", "BigUint64Array", "globalThis"];
const ES2021_GLOBALS: &[&str] = &["AggregateError", "FinalizationRegistry", "WeakRef"];

const SHARED_NODE_BROWSER_GLOBALS: &[&str] = &[
    "AbortController",
    "AbortSignal",
    "TextDecoder",
    "TextEncoder",
    "URL",
    "URLSearchParams",
    "atob",
    "btoa",
    "clearInterval",
    "clearTimeout",
    "console",
    "queueMicrotask",
    "setInterval",
    "setTimeout",
    "structuredClone",
];

const BROWSER_GLOBALS: &[&str] = &[
    "Blob",
    "CustomEvent",
    "Element",
    "Event",
    "File",
    "FileReader",
    "FormData",
    "HTMLElement",
    "Headers",
    "IntersectionObserver",
    "MutationObserver",
    "Node",
    "Request",
    "ResizeObserver",
    "Response",
    "WebSocket",
    "Worker",
    "XMLHttpRequest",
    "alert",
    "cancelAnimationFrame",
    "confirm",
    "crypto",
    "customElements",
    "document",
    "fetch",
    "getComputedStyle",
    "history",
    "localStorage",
    "location",
    "matchMedia",
    "navigator",
    "performance",
    "prompt",
    "requestAnimationFrame",
    "self",
    "sessionStorage",
    "window",
];

const BROWSER_HANDLERS: &[&str] = &["onerror", "onload", "onresize", "onscroll"];

const NODE_GLOBALS: &[&str] = &[
    "Buffer",
    "__dirname",
    "__filename",
    "clearImmediate",
    "global",
    "module",
    "process",
    "require",
    "setImmediate",
];

const WORKER_GLOBALS: &[&str] = &["close", "fetch", "importScripts", "postMessage", "self"];

const MOCHA_GLOBALS: &[&str] = &[
    "after",
    "afterEach",
    "before",
    "beforeEach",
    "context",
    "describe",
    "it",
    "mocha",
    "run",
    "specify",
    "suite",
    "test",
    "xdescribe",
    "xit",
];

const JEST_GLOBALS: &[&str] = &[
    "afterAll",
    "afterEach",
    "beforeAll",
    "beforeEach",
    "describe",
    "expect",
    "fdescribe",
    "fit",
    "it",
    "jest",
    "test",
    "xdescribe",
    "xit",
    "xtest",
];

pub(super) fn builtin_environments() -> Vec<EnvironmentDefinition> {
    let es2015 = EnvironmentDefinition::new("es2015", "ECMAScript 2015 globals")
        .readonly(ES2015_GLOBALS);
    let es2017 = EnvironmentDefinition::new("es2017", "ECMAScript 2017 globals")
        .including(&es2015)
        .readonly(ES2017_GLOBALS);
    let es2020 = EnvironmentDefinition::new("es2020", "ECMAScript 2020 globals")
        .including(&es2017)
        .readonly(ES2020_GLOBALS);
    let es2021 = EnvironmentDefinition::new("es2021", "ECMAScript 2021 globals")
        .including(&es2020)
        .readonly(ES2021_GLOBALS);

    let shared = EnvironmentDefinition::new(
        "shared-node-browser",
        "Globals common to Node.js and browsers",
    )
    .readonly(SHARED_NODE_BROWSER_GLOBALS);

    vec![
        EnvironmentDefinition::new("es6", "ECMAScript 2015 globals (alias of es2015)")
            .including(&es2015),
        EnvironmentDefinition::new("es2016", "ECMAScript 2016 globals").including(&es2015),
        EnvironmentDefinition::new("es2018", "ECMAScript 2018 globals").including(&es2017),
        EnvironmentDefinition::new("es2019", "ECMAScript 2019 globals").including(&es2017),
        EnvironmentDefinition::new("es2022", "ECMAScript 2022 globals").including(&es2021),
        EnvironmentDefinition::new("browser", "Browser globals")
            .including(&shared)
            .readonly(BROWSER_GLOBALS)
            .writable(BROWSER_HANDLERS),
        EnvironmentDefinition::new("node", "Node.js globals and scoping")
            .including(&shared)
            .readonly(NODE_GLOBALS)
            .writable(&["exports"]),
        EnvironmentDefinition::new("commonjs", "CommonJS globals and scoping")
            .readonly(&["global", "module", "require"])
            .writable(&["exports"]),
        EnvironmentDefinition::new("worker", "Web worker globals")
            .including(&shared)
            .readonly(WORKER_GLOBALS)
            .writable(&["onmessage"]),
        EnvironmentDefinition::new("amd", "AMD require() and define()")
            .readonly(&["define", "require"]),
        EnvironmentDefinition::new("mocha", "Mocha testing globals").readonly(MOCHA_GLOBALS),
        EnvironmentDefinition::new("jest", "Jest testing globals").readonly(JEST_GLOBALS),
        es2015,
        es2017,
        es2020,
        es2021,
        shared,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::GlobalAccess;

    fn find(name: &str) -> EnvironmentDefinition {
        builtin_environments()
            .into_iter()
            .find(|env| env.name == name)
            .unwrap()
    }

    #[test]
    fn test_es_versions_are_cumulative() {
        let es2021 = find("es2021");
        assert!(es2021.globals.contains_key("Promise"));
        assert!(es2021.globals.contains_key("BigInt"));
        assert!(es2021.globals.contains_key("WeakRef"));
        assert!(!find("es2017").globals.contains_key("BigInt"));
    }

    #[test]
    fn test_node_exports_writable() {
        let node = find("node");
        assert_eq!(node.globals.get("exports"), Some(&GlobalAccess::Writable));
        assert_eq!(node.globals.get("process"), Some(&GlobalAccess::Readonly));
        assert!(node.globals.contains_key("setTimeout"));
    }

    #[test]
    fn test_names_unique() {
        let envs = builtin_environments();
        let mut names: Vec<_> = envs.iter().map(|e| e.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), envs.len());
    }
}
