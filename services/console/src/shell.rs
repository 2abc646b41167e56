use crate::render;
use admin_dashboard::dashboard::{Dashboard, Route};
use admin_dashboard::error::AppError;
use admin_dashboard::workflows::employee::EmployeeField;
use admin_dashboard::workflows::vendor::{VendorField, VendorId, VendorWorkflowError};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

const HELP: &str = "\
Commands
- employees | vendors     open a screen (a leading / is fine)
- form | list             toggle the add form or the list
- set <field> <value>     edit a form field
- submit                  submit the open form
- select <id>             toggle a vendor in the list
- send                    email the selected vendors
- sent                    refresh the sent-email log
- dismiss                 hide the banner
- show                    redraw the screen
- help | quit
";

#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellCommand {
    Open(Route),
    Form,
    List,
    Set { field: String, value: String },
    Submit,
    Select(VendorId),
    Send,
    Sent,
    Dismiss,
    Show,
    Help,
    Quit,
}

impl ShellCommand {
    fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "" => return Ok(None),
            "form" => ShellCommand::Form,
            "list" => ShellCommand::List,
            "set" => {
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim()),
                    None => (rest, ""),
                };
                if field.is_empty() {
                    return Err("usage: set <field> <value>".to_string());
                }
                ShellCommand::Set {
                    field: field.to_string(),
                    value: value.to_string(),
                }
            }
            "submit" => ShellCommand::Submit,
            "select" => rest
                .parse()
                .map(ShellCommand::Select)
                .map_err(|_| format!("not a vendor id: {rest:?}"))?,
            "send" => ShellCommand::Send,
            "sent" => ShellCommand::Sent,
            "dismiss" => ShellCommand::Dismiss,
            "show" => ShellCommand::Show,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => match Route::from_path(other) {
                Some(route) => ShellCommand::Open(route),
                None => return Err(format!("unknown command {other:?}, try help")),
            },
        };
        Ok(Some(command))
    }
}

pub(crate) async fn run(dashboard: &Dashboard) -> Result<(), AppError> {
    let mut route = Route::Vendors;
    dashboard.navigate(route).await;
    print!("{}", screen(dashboard, route));
    println!("Type help for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}> ", route.path());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let command = match ShellCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };
        debug!(?command, route = route.path(), "shell command");

        match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => {
                print!("{HELP}");
                continue;
            }
            ShellCommand::Open(next) => {
                route = next;
                dashboard.navigate(route).await;
            }
            other => {
                if let Some(message) = apply(dashboard, route, other).await {
                    println!("{message}");
                }
            }
        }
        print!("{}", screen(dashboard, route));
    }
    Ok(())
}

/// Runs one screen command; the returned line is shown above the redrawn screen.
async fn apply(dashboard: &Dashboard, route: Route, command: ShellCommand) -> Option<String> {
    match route {
        Route::Employees => apply_employees(dashboard, command).await,
        Route::Vendors => apply_vendors(dashboard, command).await,
    }
}

async fn apply_employees(dashboard: &Dashboard, command: ShellCommand) -> Option<String> {
    let screen = &dashboard.employees;
    match command {
        ShellCommand::Form => screen.toggle_form(),
        ShellCommand::List => screen.toggle_list(),
        ShellCommand::Set { field, value } => {
            let Some(field) = EmployeeField::from_label(&field) else {
                return Some(format!("unknown employee field {field:?}"));
            };
            if !screen.set_field(field, value) {
                return Some("open the form first".to_string());
            }
        }
        ShellCommand::Submit => {
            if let Err(err) = screen.submit().await {
                if err.is_user_facing() {
                    return Some(err.to_string());
                }
            }
        }
        ShellCommand::Dismiss => screen.dismiss_banner(),
        ShellCommand::Show => {}
        ShellCommand::Select(_) | ShellCommand::Send | ShellCommand::Sent => {
            return Some("only available on the vendors screen".to_string());
        }
        ShellCommand::Open(_) | ShellCommand::Help | ShellCommand::Quit => {}
    }
    None
}

async fn apply_vendors(dashboard: &Dashboard, command: ShellCommand) -> Option<String> {
    let screen = &dashboard.vendors;
    let result = match command {
        ShellCommand::Form => {
            screen.toggle_form();
            Ok(())
        }
        ShellCommand::List => {
            screen.toggle_list();
            Ok(())
        }
        ShellCommand::Set { field, value } => {
            let Some(field) = VendorField::from_label(&field) else {
                return Some(format!("unknown vendor field {field:?}"));
            };
            if !screen.set_field(field, value) {
                return Some("open the form first".to_string());
            }
            Ok(())
        }
        ShellCommand::Submit => screen.submit().await,
        ShellCommand::Select(id) => screen.toggle_selection(id).map(|_| ()),
        ShellCommand::Send => screen.send_email_to_selected().await.map(|_| ()),
        ShellCommand::Sent => screen.load_sent_emails().await,
        ShellCommand::Dismiss => {
            screen.dismiss_banner();
            Ok(())
        }
        ShellCommand::Show | ShellCommand::Open(_) | ShellCommand::Help | ShellCommand::Quit => {
            Ok(())
        }
    };

    match result {
        // Inline errors and the duplicate banner are part of the redrawn screen.
        Err(VendorWorkflowError::Validation(_)) | Err(VendorWorkflowError::DuplicateEmail) => None,
        Err(err) if err.is_user_facing() => Some(err.to_string()),
        _ => None,
    }
}

fn screen(dashboard: &Dashboard, route: Route) -> String {
    match route {
        Route::Employees => {
            let screen = &dashboard.employees;
            render::employee_screen(
                &screen.view(),
                &screen.employees(),
                screen.banner().as_ref(),
            )
        }
        Route::Vendors => {
            let screen = &dashboard.vendors;
            render::vendor_screen(
                &screen.view(),
                &screen.vendors(),
                &screen.sent_emails(),
                screen.banner().as_ref(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_keeps_the_rest_of_the_line_as_value() {
        assert_eq!(
            ShellCommand::parse("set name  Sharma Supplies Pvt "),
            Ok(Some(ShellCommand::Set {
                field: "name".to_string(),
                value: "Sharma Supplies Pvt".to_string(),
            }))
        );
        assert_eq!(
            ShellCommand::parse("set ctc"),
            Ok(Some(ShellCommand::Set {
                field: "ctc".to_string(),
                value: String::new(),
            }))
        );
    }

    #[test]
    fn screens_and_ids_parse() {
        assert_eq!(
            ShellCommand::parse("Vendors"),
            Ok(Some(ShellCommand::Open(Route::Vendors)))
        );
        assert_eq!(
            ShellCommand::parse("/employees"),
            Ok(Some(ShellCommand::Open(Route::Employees)))
        );
        assert_eq!(
            ShellCommand::parse("select 3"),
            Ok(Some(ShellCommand::Select(VendorId(3))))
        );
        assert!(ShellCommand::parse("select three").is_err());
    }

    #[test]
    fn blank_lines_are_ignored_and_unknown_words_rejected() {
        assert_eq!(ShellCommand::parse("   "), Ok(None));
        assert!(ShellCommand::parse("delete 1").is_err());
        assert!(ShellCommand::parse("set").is_err());
    }
}
