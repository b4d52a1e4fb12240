use staffdir::error::Result;
use staffdir::session::Session;
use staffdir::store::fs::{FileStore, DEFAULT_FILE_NAME};
use std::io;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let store = FileStore::open(DEFAULT_FILE_NAME)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(store, stdin.lock(), stdout.lock());
    session.run()
}
