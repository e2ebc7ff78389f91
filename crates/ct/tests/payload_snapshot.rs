use std::fs;

use anyhow::Result;
use ct::app::copy::{ClipboardSink, CopyRequest, Copier, NotificationTitles};
use ct::app::selection::parse_line_list;
use ct::domain::model::FormatMode;
use ct::infra::notify::SilentNotifier;
use insta::assert_snapshot;

struct Capture(String);

impl ClipboardSink for Capture {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.0 = text.to_owned();
        Ok(())
    }

    fn read_text(&mut self) -> Result<String> {
        Ok(self.0.clone())
    }
}

#[test]
fn numbered_selection_payload() {
    let dir = tempfile::tempdir().unwrap();
    let main_rs = dir.path().join("main.rs");
    let notes = dir.path().join("notes.txt");
    fs::write(&main_rs, "fn main() {\n    println!(\"hi\");\n}\n").unwrap();
    fs::write(&notes, "alpha\nbeta\ngamma\n").unwrap();

    let request = CopyRequest {
        paths: vec![main_rs, notes],
        selection: parse_line_list("1,3").unwrap(),
        format: FormatMode::Numbered,
    };
    let mut clipboard = Capture(String::new());
    Copier::new(&mut clipboard, &SilentNotifier, NotificationTitles::default())
        .run(&request)
        .unwrap();

    let payload = clipboard.read_text().unwrap();
    assert_snapshot!("numbered_selection_payload", payload);
}
