use colored::Colorize;
use parts_admin_core::{AdminError, AdminResult, UserId};
use parts_admin_gateway::AdminService;
use parts_admin_model::{ListQuery, User, UserDraft, view};

use super::Context;
use crate::args::UserCommand;
use crate::render;

pub async fn run(ctx: &mut Context, command: UserCommand) -> anyhow::Result<()> {
    match command {
        UserCommand::List { list, role } => {
            let mut query = ListQuery::new().with_search(list.search).at_page(list.page);
            if let Some(role) = role {
                query = query.with_filter(role.as_str());
            }
            let page = view(ctx.store.users().records(), &query);

            if page.is_empty() {
                println!("{}", "No users found.".yellow());
            } else {
                println!("{}", render::users_table(&page.records));
            }
            println!("{}", render::page_footer(&page));
            Ok(())
        }
        UserCommand::Add { name, email, role } => {
            let mut draft = UserDraft::new(name, email);
            draft.role = role;
            let outcome = ctx.service.save_user(None, &draft).await;
            ctx.commit(outcome)
        }
        UserCommand::Update {
            user,
            name,
            email,
            role,
        } => {
            let current = find_user(ctx, &user)?.clone();
            let mut draft = UserDraft::from(&current);
            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(email) = email {
                draft.email = email;
            }
            if role.is_some() {
                draft.role = role;
            }
            let outcome = ctx.service.save_user(Some(current.id), &draft).await;
            ctx.commit(outcome)
        }
        UserCommand::Delete { user } => {
            let current = find_user(ctx, &user)?.clone();
            let outcome = ctx.service.delete_user(&current).await;
            ctx.commit(outcome)
        }
    }
}

/// Look a user up by numeric id, falling back to email
fn find_user<'a>(ctx: &'a Context, key: &str) -> AdminResult<&'a User> {
    match key.parse::<UserId>() {
        Ok(id) => ctx
            .store
            .users()
            .get(id)
            .ok_or_else(|| AdminError::identity(format!("no user with id {}", id))),
        Err(_) => AdminService::find::<User>(&ctx.store, key.trim()),
    }
}
