// A build script is required for cargo to register build dependencies.
fn main() {}
