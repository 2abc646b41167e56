use admin_dashboard::dashboard::Route;
use admin_dashboard::workflows::employee::{Employee, EmployeeDraft, EmployeeField, EmployeeView};
use admin_dashboard::workflows::vendor::{Selection, Vendor, VendorField, VendorForm, VendorView};
use admin_dashboard::workflows::{Banner, ScreenView};
use std::fmt::Write;

pub(crate) fn banner(banner: Option<&Banner>) -> String {
    match banner {
        Some(banner) => format!("[{}] {}\n", banner.tone.label(), banner.message),
        None => String::new(),
    }
}

pub(crate) fn employee_screen(
    view: &EmployeeView,
    employees: &[Employee],
    current: Option<&Banner>,
) -> String {
    let mut out = format!("{}\n", Route::Employees.title());
    out.push_str(&banner(current));
    match view {
        ScreenView::Idle => {
            let _ = writeln!(out, "{} employees loaded", employees.len());
        }
        ScreenView::FormOpen(draft) => out.push_str(&employee_form(draft)),
        ScreenView::ListOpen(()) => out.push_str(&employee_list(employees)),
    }
    out
}

pub(crate) fn employee_list(employees: &[Employee]) -> String {
    if employees.is_empty() {
        return "No employees yet.\n".to_string();
    }

    let mut out = String::new();
    for employee in employees {
        let designation = employee.designation.as_deref().unwrap_or("-");
        let ctc = employee
            .ctc
            .map(|ctc| ctc.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "- #{} {} <{}>, {}, CTC {}",
            employee.id, employee.name, employee.email, designation, ctc
        );
    }
    out
}

fn employee_form(draft: &EmployeeDraft) -> String {
    let mut out = String::from("Add employee\n");
    for field in EmployeeField::ALL {
        let value = match field {
            EmployeeField::Name => &draft.name,
            EmployeeField::Designation => &draft.designation,
            EmployeeField::Ctc => &draft.ctc,
            EmployeeField::Email => &draft.email,
        };
        let _ = writeln!(out, "  {}: {}", field.label(), value);
    }
    out
}

pub(crate) fn vendor_screen(
    view: &VendorView,
    vendors: &[Vendor],
    sent: &[String],
    current: Option<&Banner>,
) -> String {
    let mut out = format!("{}\n", Route::Vendors.title());
    out.push_str(&banner(current));
    match view {
        ScreenView::Idle => {
            let _ = writeln!(out, "{} vendors loaded", vendors.len());
        }
        ScreenView::FormOpen(form) => out.push_str(&vendor_form(form)),
        ScreenView::ListOpen(selection) => {
            out.push_str(&vendor_list(vendors, Some(selection)));
            if !sent.is_empty() {
                out.push('\n');
                out.push_str(&sent_emails(sent));
            }
        }
    }
    out
}

/// Rows carry a checkbox only when a selection is being edited.
pub(crate) fn vendor_list(vendors: &[Vendor], selection: Option<&Selection>) -> String {
    if vendors.is_empty() {
        return "No vendors yet.\n".to_string();
    }

    let mut out = String::new();
    for vendor in vendors {
        let mark = match selection {
            Some(selection) if selection.contains(vendor.id) => "[x] ",
            Some(_) => "[ ] ",
            None => "- ",
        };
        let _ = writeln!(
            out,
            "{mark}#{} {} <{}>, UPI {}",
            vendor.id, vendor.name, vendor.email, vendor.upi
        );
    }
    out
}

fn vendor_form(form: &VendorForm) -> String {
    let mut out = String::from("Add vendor\n");
    for field in VendorField::ALL {
        let _ = writeln!(out, "  {}: {}", field.label(), form.draft.get(field));
        if let Some(error) = form.errors.get(field) {
            let _ = writeln!(out, "    ! {error}");
        }
    }
    out
}

pub(crate) fn sent_emails(sent: &[String]) -> String {
    if sent.is_empty() {
        return "Sent emails: none\n".to_string();
    }

    let mut out = String::from("Sent emails\n");
    for line in sent {
        let _ = writeln!(out, "- {line}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use admin_dashboard::workflows::employee::EmployeeId;
    use admin_dashboard::workflows::vendor::{validate, VendorId};

    fn vendor(id: i64, name: &str) -> Vendor {
        Vendor {
            id: VendorId(id),
            name: name.to_string(),
            email: format!("{}@vendors.in", name.to_lowercase()),
            upi: format!("{}@upi", name.to_lowercase()),
        }
    }

    #[test]
    fn employee_rows_fill_missing_fields_with_dashes() {
        let employees = vec![
            Employee {
                id: EmployeeId(1),
                name: "Anita Rao".to_string(),
                designation: Some("Controller".to_string()),
                ctc: Some(1200.5),
                email: "anita@example.com".to_string(),
            },
            Employee {
                id: EmployeeId(2),
                name: "Dev Malhotra".to_string(),
                designation: None,
                ctc: None,
                email: "dev@example.com".to_string(),
            },
        ];

        assert_eq!(
            employee_list(&employees),
            "- #1 Anita Rao <anita@example.com>, Controller, CTC 1200.5\n\
             - #2 Dev Malhotra <dev@example.com>, -, CTC -\n"
        );
    }

    #[test]
    fn list_view_marks_selected_vendors() {
        let vendors = vec![vendor(1, "Acme"), vendor(2, "Globex")];
        let mut selection = Selection::default();
        selection.toggle(VendorId(2));
        let view = VendorView::ListOpen(selection);

        let rendered = vendor_screen(&view, &vendors, &[], Some(&Banner::success("Done")));

        assert_eq!(
            rendered,
            "Vendors\n[success] Done\n\
             [ ] #1 Acme <acme@vendors.in>, UPI acme@upi\n\
             [x] #2 Globex <globex@vendors.in>, UPI globex@upi\n"
        );
    }

    #[test]
    fn vendor_form_shows_inline_errors_under_their_fields() {
        let mut form = VendorForm::default();
        form.edit(VendorField::Name, "Acme");
        form.edit(VendorField::Email, "acme");
        form.errors = validate(&form.draft).expect_err("invalid draft");

        let rendered = vendor_screen(&VendorView::FormOpen(form), &[], &[], None);

        assert!(rendered.contains("  email: acme\n    ! Please enter a valid email address.\n"));
        assert!(rendered.contains("    ! Please enter a UPI.\n"));
        assert!(!rendered.contains("Please enter a name."));
    }

    #[test]
    fn empty_sent_log_says_none() {
        assert_eq!(sent_emails(&[]), "Sent emails: none\n");
    }
}
