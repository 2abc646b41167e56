use crate::cli::{EmployeeAddArgs, EmployeesCommand, SendEmailArgs, VendorAddArgs, VendorsCommand};
use crate::render;
use admin_dashboard::dashboard::Dashboard;
use admin_dashboard::error::AppError;
use admin_dashboard::workflows::employee::{EmployeeField, EmployeeWorkflowError};
use admin_dashboard::workflows::vendor::{VendorField, VendorId, VendorWorkflowError};

pub(crate) async fn employees(
    dashboard: &Dashboard,
    command: EmployeesCommand,
) -> Result<(), AppError> {
    let screen = &dashboard.employees;
    screen.mount().await.map_err(employee_failure)?;

    match command {
        EmployeesCommand::List => {
            print!("{}", render::employee_list(&screen.employees()));
        }
        EmployeesCommand::Add(EmployeeAddArgs {
            name,
            email,
            designation,
            ctc,
        }) => {
            screen.toggle_form();
            screen.set_field(EmployeeField::Name, name);
            screen.set_field(EmployeeField::Designation, designation);
            screen.set_field(EmployeeField::Ctc, ctc);
            screen.set_field(EmployeeField::Email, email);

            match screen.submit().await {
                Ok(()) => {
                    print!("{}", render::banner(screen.banner().as_ref()));
                    print!("{}", render::employee_list(&screen.employees()));
                }
                Err(err) if err.is_user_facing() => println!("Submission rejected: {err}"),
                Err(err) => return Err(employee_failure(err)),
            }
        }
    }
    Ok(())
}

pub(crate) async fn vendors(dashboard: &Dashboard, command: VendorsCommand) -> Result<(), AppError> {
    let screen = &dashboard.vendors;
    screen.mount().await.map_err(vendor_failure)?;

    match command {
        VendorsCommand::List(args) => {
            print!("{}", render::vendor_list(&screen.vendors(), None));
            if args.with_sent {
                screen.load_sent_emails().await.map_err(vendor_failure)?;
                println!();
                print!("{}", render::sent_emails(&screen.sent_emails()));
            }
        }
        VendorsCommand::Add(VendorAddArgs { name, email, upi }) => {
            screen.toggle_form();
            screen.set_field(VendorField::Name, name);
            screen.set_field(VendorField::Email, email);
            screen.set_field(VendorField::Upi, upi);

            match screen.submit().await {
                Ok(()) => {
                    print!("{}", render::banner(screen.banner().as_ref()));
                    print!("{}", render::vendor_list(&screen.vendors(), None));
                }
                Err(VendorWorkflowError::DuplicateEmail) => {
                    print!("{}", render::banner(screen.banner().as_ref()));
                }
                Err(VendorWorkflowError::Validation(errors)) => {
                    println!("Submission rejected");
                    for error in errors.iter() {
                        println!("- {}: {error}", error.field().label());
                    }
                }
                Err(err) if err.is_user_facing() => println!("Submission rejected: {err}"),
                Err(err) => return Err(vendor_failure(err)),
            }
        }
        VendorsCommand::SendEmail(SendEmailArgs { ids }) => {
            screen.toggle_list();
            for id in ids {
                if !screen.toggle_selection(VendorId(id)).map_err(vendor_failure)? {
                    // Repeated id on the command line; keep it selected.
                    screen.toggle_selection(VendorId(id)).map_err(vendor_failure)?;
                }
            }
            let sent = screen.send_email_to_selected().await.map_err(vendor_failure)?;
            println!("Emailed {} vendors", sent.len());
            print!("{}", render::sent_emails(&screen.sent_emails()));
        }
        VendorsCommand::SentEmails => {
            screen.load_sent_emails().await.map_err(vendor_failure)?;
            print!("{}", render::sent_emails(&screen.sent_emails()));
        }
    }
    Ok(())
}

fn employee_failure(err: EmployeeWorkflowError) -> AppError {
    match err {
        EmployeeWorkflowError::Backend(err) => AppError::Backend(err),
        other => AppError::Workflow(other.to_string()),
    }
}

fn vendor_failure(err: VendorWorkflowError) -> AppError {
    match err {
        VendorWorkflowError::Backend(err) => AppError::Backend(err),
        other => AppError::Workflow(other.to_string()),
    }
}
