// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to run the interactive inventory menu.
//
// Module responsibilities:
// - `record`: the shoe record and its line format in `inventory.txt`.
// - `validate`: field checks used while capturing a new shoe.
// - `store`: the in-memory inventory and its backing-file sync.
// - `ui`: the numbered menu and prompt flows built on `dialoguer`.
// - `config` / `error`: runtime settings and error types.
//
// Keeping the store free of terminal I/O lets every inventory operation
// be tested without a console.
pub mod config;
pub mod error;
pub mod record;
pub mod store;
pub mod ui;
pub mod validate;
