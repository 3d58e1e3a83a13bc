//! Binary entrypoint for the browser-hosted widget showcase.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    xtrix_showcase::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `xtrix_showcase_app` for wasm32 with the `csr` feature."
    );
}
