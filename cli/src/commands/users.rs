use std::path::Path;

use anyhow::Context;
use colored::*;

use crate::terminal::{colors, format, print, prompt::StdinConfirm};
use crate::tprint;
use till_common::{config::Config, info, success};
use till_core::users::{AssumeYes, Confirm, DeleteOutcome, UserDirectory};

pub struct UserQuery<'a> {
    pub search: Option<&'a str>,
    pub role: Option<&'a str>,
    pub delete: Option<&'a str>,
    pub assume_yes: bool,
}

pub fn users(users_path: Option<&Path>, query: UserQuery<'_>, cfg: &Config) -> anyhow::Result<()> {
    let mut directory = match users_path {
        Some(path) => UserDirectory::from_path(path)
            .with_context(|| format!("could not load users from {}", path.display()))?,
        None => UserDirectory::demo(),
    };

    if let Some(email) = query.delete {
        print::header("delete user", cfg.quiet);
        let confirm: &dyn Confirm = if query.assume_yes { &AssumeYes } else { &StdinConfirm };
        match directory.delete(email, confirm)? {
            DeleteOutcome::Deleted => success!("Deleted {email}"),
            DeleteOutcome::Cancelled => info!("Delete of {email} cancelled"),
        }
    }

    let table = directory.to_table();
    let role_filter = match query.role {
        Some(role) => Some((table.column_index("Role")?, role)),
        None => None,
    };
    let visible = table.query(query.search, role_filter)?;

    print::header("users", cfg.quiet);
    if visible.is_empty() {
        print::no_results("No users match");
    } else if cfg.quiet < 2 {
        let widths = format::column_widths(table.columns(), &visible);
        let header = format::table_line(table.columns(), &widths);
        print::print(&format!("{}", header.color(colors::PRIMARY).bold()));
        for row in &visible {
            print::print(&format::table_line(row, &widths));
        }
    }

    if cfg.quiet > 0 {
        tprint!();
    }
    print::GLOBAL_KEY_WIDTH.set("Total users".len());
    print::aligned_line(
        "Total users",
        directory.total_users().to_string().color(colors::ACCENT).bold(),
    );
    print::aligned_line("Shown", visible.len().to_string());
    print::end_of_program();
    Ok(())
}
