//! logbook - wasm binary that attaches the journal page behavior

fn main() {
    logbook_web::start();
}
