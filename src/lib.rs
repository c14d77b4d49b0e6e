pub mod auth;
pub mod automation;
pub mod config;
pub mod domain;
pub mod intake;
pub mod mail;
pub mod matching;
pub mod notifier;
pub mod notion;
pub mod prefs;
pub mod sync;
pub mod terminal;
