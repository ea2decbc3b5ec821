use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::Editor;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use swaphub_application::{
    AuthService, ConnectPrompt, DirectoryBrowser, MainTab, NotificationCenter, Page,
    PageController, ProfileEditor, RequestLedgerService, SwapRequestComposer,
};
use swaphub_core::notification::NotificationKind;
use swaphub_core::profile::{Availability, ProfileRepository, UserProfile};
use swaphub_core::swap::{SwapRequest, SwapRequestRepository};
use swaphub_infrastructure::{
    InMemoryProfileRepository, InMemorySwapRequestRepository, seed_profiles, seed_requests,
};

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        let commands = [
            "help", "login", "logout", "home", "requests", "dashboard", "search", "avail", "page",
            "connect", "offer", "unoffer", "want", "unwant", "msg", "send", "options", "accept",
            "decline", "set", "add", "rm", "toggle", "public", "save", "discard", "whoami", "quit",
        ];
        Self {
            commands: commands.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if !line.is_empty() && !line.contains(' ') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let first = line.split_whitespace().next().unwrap_or("");
        if self.commands.iter().any(|c| c == first) {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if !line.is_empty() && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// Which ledger tab is visible on the requests page.
#[derive(Clone, Copy, PartialEq)]
enum LedgerTab {
    Incoming,
    Outgoing,
}

/// All services wired together, shared by every command handler.
struct App {
    auth: Arc<AuthService>,
    browser: DirectoryBrowser,
    composer: SwapRequestComposer,
    ledger: RequestLedgerService,
    editor: ProfileEditor,
    notifications: Arc<NotificationCenter>,
}

fn build_app() -> App {
    let profiles: Arc<dyn ProfileRepository> =
        Arc::new(InMemoryProfileRepository::with_seed(seed_profiles()));
    let requests: Arc<dyn SwapRequestRepository> =
        Arc::new(InMemorySwapRequestRepository::with_seed(seed_requests()));
    let auth = Arc::new(AuthService::new(profiles.clone()));
    let notifications = Arc::new(NotificationCenter::new());

    App {
        browser: DirectoryBrowser::new(profiles.clone(), auth.clone()),
        composer: SwapRequestComposer::new(
            profiles.clone(),
            requests.clone(),
            auth.clone(),
            notifications.clone(),
        ),
        ledger: RequestLedgerService::new(requests.clone(), auth.clone(), notifications.clone()),
        editor: ProfileEditor::new(profiles, auth.clone(), notifications.clone()),
        auth,
        notifications,
    }
}

fn print_help() {
    let lines = [
        ("login <email> <password>", "log in (any non-empty pair)"),
        ("logout", "end the session"),
        ("home | requests | dashboard", "switch tabs"),
        ("search [term]", "filter the directory (empty clears)"),
        ("avail <all|weekdays|weekends|evenings>", "availability facet"),
        ("page <n>", "jump to a directory page"),
        ("connect <user-id>", "start a swap with a user"),
        ("offer/unoffer <skill>", "edit the offered set (composer)"),
        ("want/unwant <skill>", "edit the requested set (composer)"),
        ("msg <text>", "set the proposal message"),
        ("send", "submit the swap request"),
        ("options", "show skill candidates (composer)"),
        ("requests in|out", "switch ledger tab"),
        ("accept/decline <request-id>", "resolve an incoming request"),
        ("set name|location <text>", "edit the profile draft"),
        ("add/rm offered|wanted <skill>", "edit draft skill sets"),
        ("toggle <weekdays|weekends|evenings>", "flip an availability tag"),
        ("public on|off", "profile visibility"),
        ("save | discard", "commit or revert the profile draft"),
        ("whoami", "show the session identity"),
        ("quit", "exit"),
    ];
    for (cmd, desc) in lines {
        println!("  {:<42} {}", cmd.bright_cyan(), desc.bright_black());
    }
}

fn render_user_line(p: &UserProfile) {
    let tags: Vec<&str> = p.availability.iter().map(|a| a.tag()).collect();
    println!(
        "  {:<4} @{:<16} {:<18} {} {}",
        p.id.bright_black(),
        p.username.bright_cyan(),
        p.name,
        format!("{:.1}*", p.rating).yellow(),
        tags.join(",").bright_black(),
    );
    println!(
        "       {} {}",
        "offers:".bright_black(),
        p.skills_offered.join(", ").green()
    );
    println!(
        "       {} {}",
        "wants: ".bright_black(),
        p.skills_wanted.join(", ").magenta()
    );
}

async fn render_home(app: &App) -> Result<()> {
    let page = app.browser.visible_page().await?;
    let query = app.browser.query().await;

    println!("{}", "DISCOVER TALENT".bright_magenta().bold());
    let facet = query
        .availability
        .map(|a| a.label())
        .unwrap_or("All Times");
    println!(
        "{}",
        format!(
            "{} users found  |  search: '{}'  |  availability: {}",
            page.total_matches, query.search_term, facet
        )
        .bright_black()
    );

    if page.is_empty() {
        println!("{}", "No users found matching your criteria".yellow());
        println!("{}", "Try adjusting your search or filters".bright_black());
        return Ok(());
    }

    for user in &page.users {
        render_user_line(user);
    }
    println!(
        "{}",
        format!("page {} of {}", page.page, page.total_pages).bright_black()
    );
    Ok(())
}

fn render_request_line(r: &SwapRequest, tab: LedgerTab) {
    let direction = match tab {
        LedgerTab::Incoming => format!("from {}", r.from_user_id),
        LedgerTab::Outgoing => format!("to {}", r.to_user_id),
    };
    println!(
        "  {:<6} {:<10} [{}] {} <-> {}",
        r.id.bright_black(),
        direction,
        r.status.as_str().yellow(),
        r.skill_offered.green(),
        r.skill_requested.magenta(),
    );
    println!("       {}", r.message.bright_black());
}

async fn render_requests(app: &App, tab: LedgerTab) -> Result<()> {
    let incoming = app.ledger.incoming().await?;
    let outgoing = app.ledger.outgoing().await?;

    println!("{}", "SWAP TIMELINE".bright_magenta().bold());
    println!(
        "{}",
        format!(
            "incoming ({})  outgoing ({})",
            incoming.len(),
            outgoing.len()
        )
        .bright_black()
    );

    let visible = match tab {
        LedgerTab::Incoming => &incoming,
        LedgerTab::Outgoing => &outgoing,
    };
    if visible.is_empty() {
        match tab {
            LedgerTab::Incoming => println!("{}", "No incoming requests".yellow()),
            LedgerTab::Outgoing => println!("{}", "No outgoing requests".yellow()),
        }
        return Ok(());
    }
    for request in visible {
        render_request_line(request, tab);
        if app.ledger.can_resolve(request).await {
            println!(
                "       {}",
                format!("accept {id} | decline {id}", id = request.id).bright_cyan()
            );
        }
    }
    Ok(())
}

async fn render_compose(app: &App) -> Result<()> {
    println!("{}", "INITIATE SWAP".bright_magenta().bold());
    if let Some(target) = app.composer.target_profile().await? {
        println!(
            "{}",
            format!("Requesting skill exchange with @{}", target.username).bright_black()
        );
    }
    let state = app.composer.state().await;
    println!("  {} {}", "offering:  ".bright_black(), state.offered.join(", ").green());
    println!(
        "  {} {}",
        "requesting:".bright_black(),
        state.requested.join(", ").magenta()
    );
    println!("  {} {}", "message:   ".bright_black(), state.message);
    if !app.composer.can_submit().await {
        println!(
            "{}",
            "pick at least one skill on each side and write a message, then 'send'"
                .bright_black()
        );
    }
    Ok(())
}

async fn render_profile(app: &App) -> Result<()> {
    let Some(draft) = app.editor.draft().await else {
        return Ok(());
    };
    println!("{}", "YOUR PROFILE".bright_magenta().bold());
    println!("  name:         {}", draft.name);
    println!("  email:        {} {}", draft.email, "(read-only)".bright_black());
    println!(
        "  location:     {}",
        draft.location.as_deref().unwrap_or("-")
    );
    println!("  offers:       {}", draft.skills_offered.join(", ").green());
    println!("  wants:        {}", draft.skills_wanted.join(", ").magenta());
    let tags: Vec<&str> = draft.availability.iter().map(|a| a.tag()).collect();
    println!("  availability: {}", tags.join(", "));
    println!(
        "  visibility:   {}",
        if draft.is_public { "public" } else { "private" }
    );
    let stats = app.editor.stats().await?;
    println!(
        "  stats:        rating {} | {} offered | {} wanted",
        format!("{:.1}", stats.rating).yellow(),
        stats.skills_offered.to_string().green(),
        stats.skills_wanted.to_string().magenta(),
    );
    Ok(())
}

async fn render_page(app: &App, pages: &PageController, tab: LedgerTab) -> Result<()> {
    match pages.current() {
        Page::Home => render_home(app).await,
        Page::Requests => render_requests(app, tab).await,
        Page::SwapRequest => render_compose(app).await,
        Page::Profile => render_profile(app).await,
    }
}

/// Drains and prints pending toasts after each command.
async fn drain_notifications(app: &App) {
    for toast in app.notifications.active().await {
        let line = match toast.kind {
            NotificationKind::Success => toast.message.green(),
            NotificationKind::Error => toast.message.red(),
            NotificationKind::Warning => toast.message.yellow(),
            NotificationKind::Info => toast.message.bright_blue(),
        };
        println!("{}", line);
        app.notifications.dismiss(&toast.id).await;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let app = build_app();
    let mut pages = PageController::new();
    let mut ledger_tab = LedgerTab::Incoming;

    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== SWAP HUB ===".bright_magenta().bold());
    println!(
        "{}",
        "Enter the future of skill exchange. Type 'help' for commands, 'quit' to exit."
            .bright_black()
    );
    println!();

    loop {
        let location = if app.auth.is_authenticated().await {
            match pages.current() {
                Page::Home => "home",
                Page::Requests => "requests",
                Page::Profile => "profile",
                Page::SwapRequest => "swap",
            }
        } else {
            "login"
        };
        let readline = rl.readline(&format!("swaphub:{location}> "));

        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }
                let _ = rl.add_history_entry(&line);

                if let Err(e) = dispatch(&app, &mut pages, &mut ledger_tab, trimmed).await {
                    eprintln!("{}", format!("{e}").red());
                }
                drain_notifications(&app).await;
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        }
    }

    Ok(())
}

async fn dispatch(
    app: &App,
    pages: &mut PageController,
    ledger_tab: &mut LedgerTab,
    input: &str,
) -> Result<()> {
    let mut parts = input.splitn(2, ' ');
    let command = parts.next().unwrap_or("");
    let rest = parts.next().unwrap_or("").trim();

    match command {
        "help" => print_help(),
        "login" => {
            let mut args = rest.split_whitespace();
            let email = args.next().unwrap_or("");
            let password = args.next().unwrap_or("");
            println!("{}", "Authenticating...".bright_black());
            let identity = app.auth.login(email, password).await?;
            app.browser.reset_view().await;
            pages.change_tab(MainTab::Home);
            println!(
                "{}",
                format!("Welcome back, @{}!", identity.username).bright_green()
            );
            render_page(app, pages, *ledger_tab).await?;
        }
        "logout" => {
            app.auth.logout().await;
            app.browser.reset_view().await;
            pages.change_tab(MainTab::Home);
            println!("{}", "Logged out.".bright_green());
        }
        "whoami" => match app.auth.current().await {
            Some(identity) => println!(
                "@{} <{}> ({})",
                identity.username.bright_cyan(),
                identity.email,
                identity.id.bright_black()
            ),
            None => println!("{}", "Browsing anonymously.".bright_black()),
        },
        "home" => {
            pages.change_tab(MainTab::Home);
            render_page(app, pages, *ledger_tab).await?;
        }
        "requests" => {
            match rest {
                "out" | "outgoing" => *ledger_tab = LedgerTab::Outgoing,
                _ => *ledger_tab = LedgerTab::Incoming,
            }
            pages.change_tab(MainTab::Requests);
            render_page(app, pages, *ledger_tab).await?;
        }
        "dashboard" => {
            pages.change_tab(MainTab::Dashboard);
            if app.auth.is_authenticated().await {
                app.editor.begin().await?;
                render_page(app, pages, *ledger_tab).await?;
            } else {
                println!("{}", "Log in to edit your profile.".yellow());
            }
        }
        "search" => {
            app.browser.set_search_term(rest).await;
            pages.change_tab(MainTab::Home);
            render_page(app, pages, *ledger_tab).await?;
        }
        "avail" => {
            let facet = match rest {
                "" | "all" => None,
                tag => Some(tag.parse::<Availability>().map_err(anyhow::Error::msg)?),
            };
            app.browser.set_availability(facet).await;
            pages.change_tab(MainTab::Home);
            render_page(app, pages, *ledger_tab).await?;
        }
        "page" => {
            let n: usize = rest.parse().unwrap_or(1);
            app.browser.set_page(n).await;
            render_home(app).await?;
        }
        "connect" => match app.browser.connect(rest).await {
            ConnectPrompt::LoginRequired => {
                println!(
                    "{}",
                    "Log in to connect with other members.".yellow()
                );
            }
            ConnectPrompt::Compose { target_user_id } => {
                app.composer.begin(Some(target_user_id.clone())).await;
                pages.connect_user(target_user_id);
                render_page(app, pages, *ledger_tab).await?;
            }
        },
        "offer" => {
            app.composer.add_offered_skill(rest).await;
            render_compose(app).await?;
        }
        "unoffer" => {
            app.composer.remove_offered_skill(rest).await;
            render_compose(app).await?;
        }
        "want" => {
            app.composer.add_requested_skill(rest).await;
            render_compose(app).await?;
        }
        "unwant" => {
            app.composer.remove_requested_skill(rest).await;
            render_compose(app).await?;
        }
        "msg" => {
            app.composer.set_message(rest).await;
            render_compose(app).await?;
        }
        "options" => {
            let offered = app.composer.offered_skill_options().await?;
            let requested = app.composer.requested_skill_options().await?;
            println!("  {} {}", "you can offer:  ".bright_black(), offered.join(", ").green());
            println!(
                "  {} {}",
                "you can request:".bright_black(),
                requested.join(", ").magenta()
            );
        }
        "send" => {
            // Mirrors the disabled submit control: both skill sets and the
            // message must be filled in before the core gets called.
            if !app.composer.can_submit().await {
                println!(
                    "{}",
                    "pick at least one skill on each side and write a message first".yellow()
                );
            } else {
                app.composer.submit().await?;
                pages.request_sent();
                render_page(app, pages, *ledger_tab).await?;
            }
        }
        "accept" => {
            app.ledger.accept(rest).await?;
        }
        "decline" => {
            app.ledger.decline(rest).await?;
        }
        "set" => {
            let mut args = rest.splitn(2, ' ');
            let field = args.next().unwrap_or("");
            let value = args.next().unwrap_or("").trim();
            match field {
                "name" => app.editor.set_name(value).await?,
                "location" => {
                    let location = (!value.is_empty()).then(|| value.to_string());
                    app.editor.set_location(location).await?;
                }
                _ => println!("{}", "usage: set name|location <text>".bright_black()),
            }
            render_profile(app).await?;
        }
        "add" | "rm" => {
            let mut args = rest.splitn(2, ' ');
            let which = args.next().unwrap_or("");
            let skill = args.next().unwrap_or("").trim();
            match (command, which) {
                ("add", "offered") => app.editor.add_skill_offered(skill).await?,
                ("rm", "offered") => app.editor.remove_skill_offered(skill).await?,
                ("add", "wanted") => app.editor.add_skill_wanted(skill).await?,
                ("rm", "wanted") => app.editor.remove_skill_wanted(skill).await?,
                _ => println!("{}", "usage: add|rm offered|wanted <skill>".bright_black()),
            }
            render_profile(app).await?;
        }
        "toggle" => {
            let tag = rest.parse::<Availability>().map_err(anyhow::Error::msg)?;
            app.editor.toggle_availability(tag).await?;
            render_profile(app).await?;
        }
        "public" => {
            app.editor.set_public(rest != "off").await?;
            render_profile(app).await?;
        }
        "save" => {
            app.editor.save().await?;
        }
        "discard" => {
            app.editor.cancel().await?;
            render_profile(app).await?;
        }
        _ => {
            println!("{}", "Unknown command".bright_black());
        }
    }
    Ok(())
}
