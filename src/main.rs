/// Binary entrypoint for the `derhex2bin` executable.
///
/// Keeps the binary thin — all logic lives in the `derhex2bin_lib` crate so
/// unit tests can import library functions directly.
fn main() {
    derhex2bin_lib::run();
}
