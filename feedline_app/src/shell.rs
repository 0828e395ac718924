use crate::command;
use feedline_domain::api::FeedApi;
use feedline_domain::post::timeline::Timeline;
use feedline_domain::post::view::{ProfileView, TimelineView};
use feedline_domain::storage::LocalStorage;
use feedline_domain::user::profile::ProfilePage;
use feedline_domain::user::session::Session;
use feedline_domain::UserId;

use std::io::Write;
use time::UtcOffset;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const HELP: &str = "\
:login <token>  sign in with a bearer token
:logout         sign out
:whoami         show the signed in user
:refresh        fetch the latest posts again
:profile <id>   show a profile
:quit           leave
anything else is published as a post";

#[derive(Debug, Eq, PartialEq)]
enum Input<'a> {
    Login(&'a str),
    Logout,
    Whoami,
    Refresh,
    Profile(i64),
    Help,
    Quit,
    Post(&'a str),
    Invalid(&'a str),
}

impl<'a> Input<'a> {
    fn parse(line: &'a str) -> Self {
        let Some(directive) = line.trim().strip_prefix(':') else {
            return Self::Post(line);
        };

        let (name, arg) = match directive.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (directive, ""),
        };

        match name {
            "login" => Self::Login(arg),
            "logout" => Self::Logout,
            "whoami" => Self::Whoami,
            "refresh" => Self::Refresh,
            "profile" => arg.parse().map(Self::Profile).unwrap_or(Self::Invalid(line)),
            "help" => Self::Help,
            "quit" | "q" => Self::Quit,
            _ => Self::Invalid(line),
        }
    }
}

///
/// Interactive timeline: each line of `input` is either a `:` directive or a new post.
///
/// Failures are printed and the loop goes on. The loop ends at `:quit` or end of input.
///
pub async fn run(
    deps: &(impl FeedApi + LocalStorage),
    mut session: Session,
    offset: UtcOffset,
    input: impl AsyncBufRead + Unpin,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut timeline = Timeline::mount(deps, &session).await;
    write!(out, "{}", TimelineView::new(&timeline, offset))?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match Input::parse(&line) {
            Input::Quit => break,
            Input::Help => writeln!(out, "{HELP}")?,
            Input::Login(token) => {
                if let Err(e) = command::login(deps, &mut session, token, out).await {
                    writeln!(out, "! {e:#}")?;
                }
            }
            Input::Logout => match session.logout(deps) {
                Ok(()) => writeln!(out, "logged out")?,
                Err(e) => writeln!(out, "! {e}")?,
            },
            Input::Whoami => command::whoami(&session, out)?,
            Input::Refresh => {
                timeline = Timeline::mount(deps, &session).await;
                write!(out, "{}", TimelineView::new(&timeline, offset))?;
            }
            Input::Profile(user_id) => match ProfilePage::load(deps, UserId(user_id)).await {
                Ok(page) => write!(out, "{}", ProfileView::new(&page, &session, offset))?,
                Err(e) => writeln!(out, "! {e}")?,
            },
            Input::Post(content) => {
                timeline.set_composer(content);
                match timeline.submit(deps, &session).await {
                    Ok(()) => write!(out, "{}", TimelineView::new(&timeline, offset))?,
                    Err(alert) => writeln!(out, "! {alert}")?,
                }
            }
            Input::Invalid(line) => writeln!(out, "! unknown directive {line:?}, try :help")?,
        }
    }

    Ok(())
}
