use std::fs::File;
use std::io::{self, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::{cursor, execute, queue, terminal};
use simplelog::{Config, LevelFilter, WriteLogger};
use treenav::prelude::*;

const DATA: &str = r#"[
    { "key": "src", "title": "src", "children": [
        { "key": "src/main.rs", "title": "main.rs" },
        { "key": "src/lib.rs", "title": "lib.rs" },
        { "key": "src/widgets", "title": "widgets", "children": [
            { "key": "src/widgets/tree.rs", "title": "tree.rs" },
            { "key": "src/widgets/list.rs", "title": "list.rs" },
            { "key": "src/widgets/legacy.rs", "title": "legacy.rs", "disabled": true }
        ] }
    ] },
    { "key": "tests", "title": "tests", "children": [
        { "key": "tests/tree.rs", "title": "tree.rs" }
    ] },
    { "key": "Cargo.toml", "title": "Cargo.toml" },
    { "key": "README.md", "title": "README.md" }
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("explorer.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let model = TreeModel::from_json(DATA)?;
    model.validate()?;
    let options = TreeOptions::new().checkable().multiple();
    let mut tree = TreeView::from_model(model, options);

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut stdout, &mut tree);

    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(stdout: &mut io::Stdout, tree: &mut TreeView) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        draw(stdout, tree)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }
        if key.code == KeyCode::Esc {
            return Ok(());
        }

        if let Some(nav) = TreeKey::from_key_event(&key) {
            tree.handle_key(nav);
        } else {
            edit_query(tree, &key);
        }

        for event in tree.take_events() {
            log::info!("{event:?}");
        }
    }
}

/// Typed characters edit the search query.
fn edit_query(tree: &mut TreeView, key: &KeyEvent) {
    let mut query = tree.query().to_string();
    match key.code {
        KeyCode::Char(c) => query.push(c),
        KeyCode::Backspace => {
            query.pop();
        }
        _ => return,
    }
    tree.set_search(query);
}

fn draw(stdout: &mut io::Stdout, tree: &TreeView) -> io::Result<()> {
    queue!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0),
        Print("Tree explorer - arrows move, Enter selects, Space checks, Esc quits"),
        cursor::MoveTo(0, 1),
        Print("Type to search, Backspace to erase"),
        cursor::MoveTo(0, 2),
        Print(format!("search: {}", tree.query())),
    )?;

    for (row, node) in tree.visible().iter().enumerate() {
        let attrs = tree.aria(node);
        let indent = "  ".repeat(node.depth - 1);
        let arrow = match attrs.expanded {
            Some(true) => "v ",
            Some(false) => "> ",
            None => "  ",
        };
        let check = match attrs.checked {
            Some(CheckState::Checked) => "[x] ",
            Some(CheckState::Indeterminate) => "[-] ",
            Some(CheckState::Unchecked) => "[ ] ",
            None => "",
        };
        let marker = if attrs.selected { "*" } else { " " };

        queue!(stdout, cursor::MoveTo(0, row as u16 + 4))?;
        if attrs.tab_index == 0 {
            queue!(stdout, SetAttribute(Attribute::Reverse))?;
        }
        if attrs.disabled {
            queue!(stdout, SetAttribute(Attribute::Dim))?;
        }
        queue!(
            stdout,
            Print(format!("{marker}{indent}{arrow}{check}{}", node.node.title)),
            SetAttribute(Attribute::Reset),
        )?;
    }

    stdout.flush()
}
