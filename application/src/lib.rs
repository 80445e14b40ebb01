//! Application provides terminal pages of the recipe book over the
//! [`Service`].

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod args;
pub mod config;
mod context;
pub mod debounce;
pub mod error;
pub mod input;
pub mod page;
pub mod view;

use std::{fmt, io::Write};

use futures::{
    future::LocalBoxFuture,
    stream::{FuturesUnordered, StreamExt as _},
    FutureExt as _,
};
use service::{
    command::{self, Command as _},
    domain::{recipe, user::Session, Recipe},
    infra::{DummyJson, JsonFile},
};
use tokio::{
    io::{self, AsyncBufRead, AsyncBufReadExt as _, BufReader},
    time,
};
// Used in binary.
use tracing_subscriber as _;

use self::{
    debounce::Debounce,
    input::Input,
    page::{
        catalog::{Catalog, Loaded},
        detail, Ticket,
    },
};

pub use self::{
    args::{Args, Page},
    config::Config,
    context::Context,
    error::{AsError, Error},
};

/// [`Service`] with filled infrastructure dependencies.
///
/// [`Service`]: service::Service
pub type Service = service::Service<DummyJson, JsonFile>;

/// Opens the provided [`Page`].
///
/// # Errors
///
/// If the [`Page`] cannot be shown.
pub async fn open(ctx: &Context, page: Page) -> Result<(), Error> {
    match page {
        Page::Home => home(ctx).await,
        Page::Login { username, password } => {
            login(ctx, &username, &password).await
        }
        Page::Logout => logout(ctx).await,
        Page::Recipes => recipes(ctx).await,
        Page::Recipe { id } => recipe(ctx, id).await,
    }
}

/// Shows the home page with the featured recipes strip.
///
/// # Errors
///
/// If the persisted session cannot be read.
pub async fn home(ctx: &Context) -> Result<(), Error> {
    if let Some(session) = ctx.current_session().await? {
        println!("{}", session.greeting());
    }

    let landing = page::home::Home::new(ctx.config().home.into());
    let result = ctx
        .service()
        .execute(landing.load())
        .await
        .map_err(AsError::into_error);
    println!("{}", view::Featured(&landing.finish_load(result)));

    Ok(())
}

/// Logs in with the provided credentials and opens the catalog.
///
/// Opens the catalog right away if somebody is logged in already.
///
/// # Errors
///
/// If the credentials are empty or rejected, or the recipe directory is
/// unreachable.
pub async fn login(
    ctx: &Context,
    username: &str,
    password: &str,
) -> Result<(), Error> {
    if let Some(session) = ctx.current_session().await? {
        return browse_terminal(ctx, session).await;
    }

    let credentials = page::login::credentials(username, password)?;

    println!("{}", page::login::Status::Authenticating);
    let session = ctx
        .service()
        .execute(command::CreateUserSession { credentials })
        .await
        .map_err(AsError::into_error)?;
    println!("{}", page::login::Status::Succeeded);

    time::sleep(ctx.config().login.redirect_delay).await;

    browse_terminal(ctx, session).await
}

/// Logs out, forgetting the persisted session.
///
/// # Errors
///
/// If the persisted session cannot be deleted.
pub async fn logout(ctx: &Context) -> Result<(), Error> {
    sign_out(ctx, &mut std::io::stdout()).await
}

/// Opens the interactive catalog.
///
/// # Errors
///
/// If nobody is logged in, or the input cannot be read.
pub async fn recipes(ctx: &Context) -> Result<(), Error> {
    let session = ctx.require_session().await?;
    browse_terminal(ctx, session).await
}

/// Shows full details of the recipe with the provided [`recipe::Id`].
///
/// # Errors
///
/// If nobody is logged in, or the detail view is disabled.
pub async fn recipe(ctx: &Context, id: recipe::Id) -> Result<(), Error> {
    _ = ctx.require_session().await?;

    let config: page::catalog::Config = ctx.config().catalog.into();
    let mut modal = detail::Modal::new(config.detail_view);
    let (query, ticket) = modal.open(id)?;
    println!("{}", view::Modal(modal.state()));

    let result = ctx
        .service()
        .execute(query)
        .await
        .map_err(AsError::into_error);
    _ = modal.resolve(ticket, result);
    println!("{}", view::Modal(modal.state()));

    Ok(())
}

/// Deletes the persisted session, reporting it to the `out`put.
async fn sign_out(ctx: &Context, out: &mut impl Write) -> Result<(), Error> {
    ctx.service()
        .execute(command::DeleteUserSession)
        .await
        .map_err(AsError::into_error)?;
    show(out, "Logged out. Log in with `recipe-book login`.")
}

/// Writes the provided `view` as a line of the `out`put.
fn show(out: &mut impl Write, view: impl fmt::Display) -> Result<(), Error> {
    writeln!(out, "{view}").map_err(|e| Error::internal(&e))
}

/// Result of a fetch performed by the interactive catalog.
enum Fetched {
    /// Whole recipe collection.
    Recipes(Ticket, Result<Vec<Recipe>, Error>),

    /// Single recipe.
    Recipe(Ticket, Result<Option<Recipe>, Error>),
}

/// Runs the interactive catalog over the standard input and output.
async fn browse_terminal(ctx: &Context, session: Session) -> Result<(), Error> {
    browse(ctx, session, BufReader::new(io::stdin()), &mut std::io::stdout())
        .await
}

/// Runs the interactive catalog in the provided [`Session`], reading
/// commands from the `reader` and writing pages to the `out`put.
///
/// Leaves once the user quits or logs out. Once the `reader` ends, leaves
/// after the started fetches and the pending search are shown.
async fn browse<R, W>(
    ctx: &Context,
    session: Session,
    reader: R,
    out: &mut W,
) -> Result<(), Error>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let config: page::catalog::Config = ctx.config().catalog.into();
    let mut catalog = Catalog::new(session, config);
    let mut modal = detail::Modal::new(config.detail_view);
    let mut search =
        Debounce::<String>::new(ctx.config().catalog.search_debounce);
    let mut fetches = FuturesUnordered::<LocalBoxFuture<'_, Fetched>>::new();
    let mut lines = reader.lines();
    let mut reading = true;

    show(out, catalog.session().greeting())?;
    show(out, input::USAGE)?;

    let (query, ticket) = catalog.begin_load();
    fetches.push(
        async move {
            let result = ctx
                .service()
                .execute(query)
                .await
                .map_err(AsError::into_error);
            Fetched::Recipes(ticket, result)
        }
        .boxed_local(),
    );
    show(out, "Loading recipes...")?;

    loop {
        if !reading && fetches.is_empty() && !search.is_pending() {
            break;
        }

        tokio::select! {
            Some(fetched) = fetches.next() => match fetched {
                Fetched::Recipes(ticket, result) => {
                    match catalog.finish_load(ticket, result) {
                        Some(Loaded::Ready { cuisines, render }) => {
                            show(out, view::Cuisines {
                                cuisines: &cuisines,
                                selected: &catalog.filter().cuisine,
                            })?;
                            show(out, view::Render(&render))?;
                        }
                        Some(Loaded::Failed) => {
                            show(out, page::catalog::UNAVAILABLE)?;
                        }
                        None => {}
                    }
                }
                Fetched::Recipe(ticket, result) => {
                    if modal.resolve(ticket, result) {
                        show(out, view::Modal(modal.state()))?;
                    }
                }
            },
            query = search.fired() => {
                if let Some(render) = catalog.set_query(&query) {
                    show(out, view::Render(&render))?;
                }
            }
            line = lines.next_line(), if reading => {
                let Some(line) = line.map_err(|e| Error::internal(&e))? else {
                    reading = false;
                    continue;
                };
                if line.trim().is_empty() {
                    continue;
                }
                let input = match line.parse::<Input>() {
                    Ok(input) => input,
                    Err(e) => {
                        show(out, e)?;
                        continue;
                    }
                };
                match input {
                    Input::Search(text) => search.schedule(text),
                    Input::Cuisine(cuisine) => {
                        if let Some(render) = catalog.set_cuisine(cuisine) {
                            show(out, view::Render(&render))?;
                        }
                    }
                    Input::Cuisines => {
                        if let Some(cuisines) = catalog.cuisines() {
                            show(out, view::Cuisines {
                                cuisines,
                                selected: &catalog.filter().cuisine,
                            })?;
                        }
                    }
                    Input::More => {
                        if let Some(render) = catalog.show_more() {
                            show(out, view::Render(&render))?;
                        }
                    }
                    Input::View(id) => match modal.open(id) {
                        Ok((query, ticket)) => {
                            show(out, view::Modal(modal.state()))?;
                            fetches.push(
                                async move {
                                    let result = ctx
                                        .service()
                                        .execute(query)
                                        .await
                                        .map_err(AsError::into_error);
                                    Fetched::Recipe(ticket, result)
                                }
                                .boxed_local(),
                            );
                        }
                        Err(e) => show(out, e)?,
                    },
                    Input::Close => modal.close(),
                    Input::Logout => return sign_out(ctx, out).await,
                    Input::Quit => break,
                }
            }
        }
    }

    Ok(())
}
