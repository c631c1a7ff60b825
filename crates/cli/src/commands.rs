// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command surface.
//!
//! Each command drives a page the way an operator would: load it, open a
//! form or dialog, fill it in, submit. Output is the rendered list.

use clap::{Args, Subcommand};
use helpdesk_console::{Confirmation, SessionError};
use helpdesk_console_api::{
    ApiError, ApiTransport, Console, DirectoryPage, MutationOutcome, RequestsPage,
};
use helpdesk_domain::{DepartmentDraft, EntityId, RequestDraft, UserDraft, technicians};

use crate::render;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List or file support requests
    #[command(visible_alias = "r", subcommand)]
    Requests(RequestsCommand),

    /// List the users that requests can be assigned to
    #[command(visible_alias = "t")]
    Technicians,

    /// Manage console users
    #[command(visible_alias = "u", subcommand)]
    Users(UsersCommand),

    /// Manage departments
    #[command(visible_alias = "d", subcommand)]
    Departments(DepartmentsCommand),
}

#[derive(Debug, Clone, Subcommand)]
pub enum RequestsCommand {
    /// List requests, newest first
    List {
        /// Earliest creation date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,
        /// Latest creation date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,
    },
    /// File a new request
    Create(RequestFields),
}

#[derive(Debug, Clone, Args)]
pub struct RequestFields {
    #[arg(long)]
    subject: String,
    #[arg(long)]
    description: String,
    /// Department identifier
    #[arg(long)]
    department: String,
    /// Technician (user) identifier
    #[arg(long)]
    technician: String,
}

#[derive(Debug, Clone, Subcommand)]
pub enum UsersCommand {
    /// List users
    List,
    /// Create a user
    Create {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
    },
    /// Update a user; omitted fields keep their current value
    Update {
        id: String,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        /// New password; the current one is kept when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Delete a user
    Delete { id: String },
}

#[derive(Debug, Clone, Subcommand)]
pub enum DepartmentsCommand {
    /// List departments
    List,
    /// Create a department
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        director: Option<String>,
    },
    /// Update a department; omitted fields keep their current value
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        /// Director name; pass an empty value to clear it
        #[arg(long)]
        director: Option<String>,
    },
    /// Delete a department
    Delete { id: String },
}

impl Command {
    /// Describes the command for error messages ("Error {action}: ...").
    #[must_use]
    pub const fn action(&self) -> &'static str {
        match self {
            Self::Requests(RequestsCommand::List { .. }) => "loading requests",
            Self::Requests(RequestsCommand::Create(_)) => "creating request",
            Self::Technicians => "loading technicians",
            Self::Users(UsersCommand::List) => "loading users",
            Self::Users(UsersCommand::Create { .. }) => "creating user",
            Self::Users(UsersCommand::Update { .. }) => "updating user",
            Self::Users(UsersCommand::Delete { .. }) => "deleting user",
            Self::Departments(DepartmentsCommand::List) => "loading departments",
            Self::Departments(DepartmentsCommand::Create { .. }) => "creating department",
            Self::Departments(DepartmentsCommand::Update { .. }) => "updating department",
            Self::Departments(DepartmentsCommand::Delete { .. }) => "deleting department",
        }
    }

    /// Runs the command against `console` and renders the resulting list.
    ///
    /// Returns `None` when there is nothing to show (a declined delete).
    ///
    /// # Errors
    ///
    /// Returns the first failed operation.
    pub async fn run<T, C>(self, console: &Console<T, C>) -> Result<Option<String>, ApiError>
    where
        T: ApiTransport + Sync,
        C: Confirmation + Sync,
    {
        match self {
            Self::Requests(command) => command.run(console).await,
            Self::Technicians => {
                let mut page = DirectoryPage::new(console);
                page.load_users().await?;
                Ok(Some(render::users(&technicians(page.users().list()))))
            }
            Self::Users(command) => command.run(console).await,
            Self::Departments(command) => command.run(console).await,
        }
    }
}

impl RequestsCommand {
    async fn run<T, C>(self, console: &Console<T, C>) -> Result<Option<String>, ApiError>
    where
        T: ApiTransport + Sync,
        C: Confirmation + Sync,
    {
        let mut page = RequestsPage::new(console);
        match self {
            Self::List { start, end } => {
                page.set_date_range(
                    start.as_deref().unwrap_or_default(),
                    end.as_deref().unwrap_or_default(),
                )
                .await?;
            }
            Self::Create(fields) => {
                page.open_informe().await?;
                let draft: &mut RequestDraft =
                    page.informe_draft_mut().ok_or(SessionError::NotOpen)?;
                *draft = RequestDraft {
                    subject: fields.subject,
                    description: fields.description,
                    department: fields.department,
                    technician: fields.technician,
                };
                page.submit_informe().await?;
            }
        }
        Ok(Some(render::requests(page.requests().list())))
    }
}

impl UsersCommand {
    async fn run<T, C>(self, console: &Console<T, C>) -> Result<Option<String>, ApiError>
    where
        T: ApiTransport + Sync,
        C: Confirmation + Sync,
    {
        let mut page = DirectoryPage::new(console);
        match self {
            Self::List => page.load_users().await?,
            Self::Create {
                username,
                password,
                first_name,
                last_name,
            } => {
                *page.new_user_mut() = UserDraft {
                    username,
                    first_name,
                    last_name,
                    password,
                };
                page.create_user().await?;
            }
            Self::Update {
                id,
                username,
                first_name,
                last_name,
                password,
            } => {
                page.load_users().await?;
                page.edit_user(&EntityId::new(&id))?;
                let draft: &mut UserDraft = page.user_draft_mut().ok_or(SessionError::NotOpen)?;
                if let Some(username) = username {
                    draft.username = username;
                }
                if let Some(first_name) = first_name {
                    draft.first_name = first_name;
                }
                if let Some(last_name) = last_name {
                    draft.last_name = last_name;
                }
                if let Some(password) = password {
                    draft.password = password;
                }
                page.save_user().await?;
            }
            Self::Delete { id } => {
                page.load_users().await?;
                if page.delete_user(&EntityId::new(&id)).await? == MutationOutcome::Declined {
                    return Ok(None);
                }
            }
        }
        Ok(Some(render::users(page.users().list())))
    }
}

impl DepartmentsCommand {
    async fn run<T, C>(self, console: &Console<T, C>) -> Result<Option<String>, ApiError>
    where
        T: ApiTransport + Sync,
        C: Confirmation + Sync,
    {
        let mut page = DirectoryPage::new(console);
        match self {
            Self::List => page.load_departments().await?,
            Self::Create { name, director } => {
                *page.new_department_mut() = DepartmentDraft {
                    name,
                    director: director.unwrap_or_default(),
                };
                page.create_department().await?;
            }
            Self::Update { id, name, director } => {
                page.load_departments().await?;
                page.edit_department(&EntityId::new(&id))?;
                let draft: &mut DepartmentDraft =
                    page.department_draft_mut().ok_or(SessionError::NotOpen)?;
                if let Some(name) = name {
                    draft.name = name;
                }
                if let Some(director) = director {
                    draft.director = director;
                }
                page.save_department().await?;
            }
            Self::Delete { id } => {
                page.load_departments().await?;
                if page.delete_department(&EntityId::new(&id)).await? == MutationOutcome::Declined
                {
                    return Ok(None);
                }
            }
        }
        Ok(Some(render::departments(page.departments().list())))
    }
}
