use std::io::{self, stdout};

use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use classic_crypto_rs::dispatch;

enum InputMode {
    Normal,
    Editing,
    SelectingMethod,
}

enum FocusedField {
    Text,
    Key,
}

#[derive(Clone, Copy, PartialEq)]
enum CipherOp {
    Encrypt,
    Decrypt,
}

struct App {
    input_mode: InputMode,
    focused_field: FocusedField,
    op: CipherOp,

    text: String,
    key: String,
    result: String,

    method_list_state: ListState,
    selected_method: usize,
}

impl App {
    fn new() -> App {
        let mut method_list_state = ListState::default();
        method_list_state.select(Some(0));
        App {
            input_mode: InputMode::Normal,
            focused_field: FocusedField::Text,
            op: CipherOp::Encrypt,
            text: String::new(),
            key: String::new(),
            result: String::new(),
            method_list_state,
            selected_method: 0,
        }
    }

    fn run_cipher(&mut self) {
        let method = dispatch::methods()[self.selected_method].id;
        let key = match self.key.trim() {
            "" => None,
            _ => Some(self.key.as_str()),
        };

        let outcome = match self.op {
            CipherOp::Encrypt => dispatch::encrypt(&self.text, method, key),
            CipherOp::Decrypt => dispatch::decrypt(&self.text, method, key),
        };
        self.result = match outcome {
            Ok(text) => text,
            Err(e) => format!("Error: {e}"),
        };
    }
}

fn main() -> io::Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new();
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match app.input_mode {
                    InputMode::Normal => match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Char('e') => {
                            app.input_mode = InputMode::Editing;
                        }
                        KeyCode::Char('c') => {
                            app.input_mode = InputMode::SelectingMethod;
                        }
                        KeyCode::Char('d') => {
                            app.op = match app.op {
                                CipherOp::Encrypt => CipherOp::Decrypt,
                                CipherOp::Decrypt => CipherOp::Encrypt,
                            };
                        }
                        KeyCode::Tab => {
                            app.focused_field = match app.focused_field {
                                FocusedField::Text => FocusedField::Key,
                                FocusedField::Key => FocusedField::Text,
                            };
                        }
                        KeyCode::Enter => {
                            app.run_cipher();
                        }
                        _ => {}
                    },
                    InputMode::SelectingMethod => match key.code {
                        KeyCode::Esc => {
                            app.input_mode = InputMode::Normal;
                        }
                        KeyCode::Up => {
                            let count = dispatch::methods().len();
                            let i = match app.method_list_state.selected() {
                                Some(0) | None => count - 1,
                                Some(i) => i - 1,
                            };
                            app.method_list_state.select(Some(i));
                            app.selected_method = i;
                        }
                        KeyCode::Down => {
                            let count = dispatch::methods().len();
                            let i = match app.method_list_state.selected() {
                                Some(i) if i + 1 < count => i + 1,
                                _ => 0,
                            };
                            app.method_list_state.select(Some(i));
                            app.selected_method = i;
                        }
                        KeyCode::Enter => {
                            app.input_mode = InputMode::Normal;
                        }
                        _ => {}
                    },
                    InputMode::Editing => match key.code {
                        KeyCode::Esc => {
                            app.input_mode = InputMode::Normal;
                        }
                        KeyCode::Char(c) => match app.focused_field {
                            FocusedField::Text => app.text.push(c),
                            FocusedField::Key => app.key.push(c),
                        },
                        KeyCode::Backspace => match app.focused_field {
                            FocusedField::Text => {
                                app.text.pop();
                            }
                            FocusedField::Key => {
                                app.key.pop();
                            }
                        },
                        KeyCode::Tab => {
                            app.focused_field = match app.focused_field {
                                FocusedField::Text => FocusedField::Key,
                                FocusedField::Key => FocusedField::Text,
                            };
                        }
                        KeyCode::Enter => {
                            app.run_cipher();
                        }
                        _ => {}
                    },
                }
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let info = &dispatch::methods()[app.selected_method];
    let op_name = match app.op {
        CipherOp::Encrypt => "Encrypt",
        CipherOp::Decrypt => "Decrypt",
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // method
            Constraint::Length(3), // text
            Constraint::Length(3), // key
            Constraint::Min(3),    // result
            Constraint::Length(3), // help
        ])
        .split(f.area());

    let (msg, style) = match app.input_mode {
        InputMode::Normal => (
            vec![
                "Normal Mode".into(),
                " | ".into(),
                "q".bold(),
                " to exit, ".into(),
                "e".bold(),
                " to edit, ".into(),
                "c".bold(),
                " to select method, ".into(),
                "d".bold(),
                " to toggle direction, ".into(),
                "ENTER".bold(),
                " to run".into(),
            ],
            Style::default().add_modifier(Modifier::RAPID_BLINK),
        ),
        InputMode::Editing => (
            vec![
                "Editing Mode".into(),
                " | ".into(),
                "ESC".bold(),
                " to stop editing, ".into(),
                "TAB".bold(),
                " to switch field, ".into(),
                "ENTER".bold(),
                " to run".into(),
            ],
            Style::default(),
        ),
        InputMode::SelectingMethod => (
            vec![
                "Selecting Method".into(),
                " | ".into(),
                "UP/DOWN".bold(),
                " to move, ".into(),
                "ENTER/ESC".bold(),
                " to confirm".into(),
            ],
            Style::default(),
        ),
    };
    let help_message = Paragraph::new(Line::from(msg).style(style));
    f.render_widget(help_message, chunks[4]);

    let method_display = Paragraph::new(format!("{} [{op_name}]", info.label)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Method (Press 'c' to change)"),
    );
    f.render_widget(method_display, chunks[0]);

    let text_input = Paragraph::new(app.text.as_str())
        .style(match app.focused_field {
            FocusedField::Text => Style::default().fg(Color::Yellow),
            _ => Style::default(),
        })
        .block(Block::default().borders(Borders::ALL).title("Text"));
    f.render_widget(text_input, chunks[1]);

    let key_title = if info.requires_key {
        format!("Key ({})", info.hint)
    } else {
        format!("Key (optional: {})", info.hint)
    };
    let key_input = Paragraph::new(app.key.as_str())
        .style(match app.focused_field {
            FocusedField::Key => Style::default().fg(Color::Yellow),
            _ => Style::default(),
        })
        .block(Block::default().borders(Borders::ALL).title(key_title));
    f.render_widget(key_input, chunks[2]);

    let result_display = Paragraph::new(app.result.as_str())
        .block(Block::default().borders(Borders::ALL).title("Result"))
        .wrap(Wrap { trim: true });
    f.render_widget(result_display, chunks[3]);

    if let InputMode::SelectingMethod = app.input_mode {
        let area = centered_rect(60, 40, f.area());
        f.render_widget(Clear, area);
        let items: Vec<ListItem> = dispatch::methods()
            .iter()
            .map(|m| ListItem::new(m.label))
            .collect();
        let list = List::new(items)
            .block(Block::default().title("Select Method").borders(Borders::ALL))
            .highlight_style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow))
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, area, &mut app.method_list_state);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
