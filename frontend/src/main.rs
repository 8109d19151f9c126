// The wasm entry point is `start` in lib.rs; this binary only exists so
// trunk has a target to build.
fn main() {}
