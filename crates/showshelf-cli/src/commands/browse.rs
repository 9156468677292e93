// Interactive catalog browser. All state is in memory; exiting the loop
// discards everything except the configuration file.

use catalog_config::{Config, PathManager};
use catalog_core::{seed, Session};
use catalog_models::{Content, ContentId, Profile, ProfileId};
use color_eyre::Result;
use comfy_table::{Cell, Table};
use tracing::info;

use super::prompts;
use crate::output::Output;

const GIB: u64 = 1024 * 1024 * 1024;
const MIB: u64 = 1024 * 1024;

pub fn run_browse(region: Option<String>, profile: Option<String>, output: &Output) -> Result<()> {
    let config = load_config(output);
    let region = region.unwrap_or_else(|| config.browse.region.clone());

    let mut session = seed::sample_session()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to build the sample catalog: {}", e))?;

    if let Some(name) = profile.or_else(|| config.browse.default_profile.clone()) {
        let id = session
            .profiles()
            .iter()
            .find(|p| p.name() == name)
            .map(|p| p.id().clone());
        match id {
            Some(id) => {
                session.switch_profile(&id);
            }
            None => output.warn(format!("No profile named '{}', using the first one", name)),
        }
    }

    info!(
        operation = "browse_start",
        region = %region,
        titles = session.catalog().len(),
        "Starting catalog browser"
    );

    loop {
        let current = session
            .current_profile()
            .map(|p| p.name().to_string())
            .unwrap_or_else(|| "none".to_string());

        let choice = prompts::prompt_select(
            &format!("ShowShelf (profile: {})", current),
            &[
                "Browse catalog",
                "Title details",
                "Play something",
                "Downloads",
                "Rate a title",
                "Manage watchlist",
                "View watch history",
                "Profiles",
                "Exit",
            ],
        )?;

        match choice {
            0 => browse_catalog(&session, &region),
            1 => title_details(&session, &region)?,
            2 => play_something(&mut session, output)?,
            3 => manage_downloads(&mut session, output)?,
            4 => rate_title(&mut session, output)?,
            5 => manage_watchlist(&mut session, output)?,
            6 => view_watch_history(&mut session, output)?,
            7 => manage_profiles(&mut session, output)?,
            _ => break,
        }
    }

    output.info("Goodbye.");
    Ok(())
}

fn load_config(output: &Output) -> Config {
    let config_file = PathManager::default().config_file();
    if !config_file.exists() {
        return Config::default();
    }
    match Config::load_from_file(&config_file) {
        Ok(config) => config,
        Err(e) => {
            output.warn(format!(
                "Ignoring unreadable config {}: {}",
                config_file.display(),
                e
            ));
            Config::default()
        }
    }
}

fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_header(
        headers
            .iter()
            .map(|h| {
                Cell::new(*h)
                    .fg(comfy_table::Color::Cyan)
                    .add_attribute(comfy_table::Attribute::Bold)
            })
            .collect::<Vec<_>>(),
    );
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

/// Let the user pick a title from the catalog entries matching `filter`.
/// Returns None when nothing matches.
fn select_title<F>(session: &Session, filter: F, prompt: &str) -> Result<Option<ContentId>>
where
    F: Fn(&Content) -> bool,
{
    let choices: Vec<&Content> = session
        .catalog()
        .items()
        .iter()
        .filter(|content| filter(content))
        .collect();
    if choices.is_empty() {
        return Ok(None);
    }

    let labels: Vec<String> = choices
        .iter()
        .map(|content| {
            format!(
                "{} ({}, {})",
                content.title(),
                content.kind(),
                content.release_year()
            )
        })
        .collect();
    let index = prompts::prompt_select(prompt, &labels)?;
    Ok(Some(choices[index].id().clone()))
}

fn title_for(session: &Session, id: &ContentId) -> String {
    session
        .catalog()
        .get(id)
        .map(|content| content.title().to_string())
        .unwrap_or_else(|| id.to_string())
}

fn format_size(bytes: u64) -> String {
    if bytes >= GIB {
        format!("{:.1} GiB", bytes as f64 / GIB as f64)
    } else {
        format!("{:.0} MiB", bytes as f64 / MIB as f64)
    }
}

fn availability_mark(available: bool) -> String {
    if available {
        "✓".to_string()
    } else {
        "✗".to_string()
    }
}

fn browse_catalog(session: &Session, region: &str) {
    let region_header = format!("In {}", region);
    let mut table = new_table(&[
        "Title",
        "Kind",
        "Year",
        "Duration",
        "Genres",
        "Rating",
        region_header.as_str(),
    ]);

    for content in session.catalog().items() {
        let available = content
            .as_streamable()
            .map(|stream| stream.is_available_in_region(region))
            .unwrap_or(false);
        table.add_row(vec![
            content.title().to_string(),
            content.kind().to_string(),
            content.release_year().to_string(),
            content.duration(),
            content.genres().join(", "),
            format!("{:.1}", content.rating()),
            availability_mark(available),
        ]);
    }

    println!("{}", table);
}

fn title_details(session: &Session, region: &str) -> Result<()> {
    let Some(id) = select_title(session, |_| true, "Which title?")? else {
        return Ok(());
    };
    let Some(content) = session.catalog().get(&id) else {
        return Ok(());
    };

    let mut table = new_table(&[content.title()]);
    table.add_row(vec!["Info".to_string(), content.info()]);
    table.add_row(vec![
        "Description".to_string(),
        content.description().to_string(),
    ]);
    table.add_row(vec!["Duration".to_string(), content.duration()]);
    table.add_row(vec![
        "Rating".to_string(),
        format!("{:.1} ({} ratings)", content.rating(), content.rating_count()),
    ]);

    if let Some(stream) = content.as_streamable() {
        table.add_row(vec![
            "Stream quality".to_string(),
            format!("{}p", stream.stream_quality()),
        ]);
        table.add_row(vec![
            "Subtitles".to_string(),
            stream.available_subtitles().join(", "),
        ]);
        table.add_row(vec![
            format!("Available in {}", region),
            availability_mark(stream.is_available_in_region(region)),
        ]);
    }

    if let Some(download) = content.as_downloadable() {
        table.add_row(vec![
            "Download".to_string(),
            format!(
                "{} at {}",
                format_size(download.download_size()),
                download.download_quality()
            ),
        ]);
        table.add_row(vec![
            "Download state".to_string(),
            download.download_state().label().to_string(),
        ]);
    }

    if let Some(ratable) = content.as_ratable() {
        table.add_row(vec![
            "Viewer rating".to_string(),
            format!("{:.1}", ratable.average_rating()),
        ]);
        table.add_row(vec!["Reviews".to_string(), ratable.user_reviews().join("\n")]);
    }

    println!("{}", table);
    Ok(())
}

fn play_something(session: &mut Session, output: &Output) -> Result<()> {
    let Some(id) = select_title(session, |_| true, "Pick a title to play")? else {
        output.warn("The catalog is empty");
        return Ok(());
    };
    let title = title_for(session, &id);

    if let Some(playable) = session
        .catalog_mut()
        .get_mut(&id)
        .and_then(|content| content.as_playable_mut())
    {
        playable.play();
    }
    output.success(format!("Now playing {}", title));

    let percent = prompts::prompt_float("How far did you get, in percent", Some(100.0))?;

    if let Some(playable) = session
        .catalog_mut()
        .get_mut(&id)
        .and_then(|content| content.as_playable_mut())
    {
        playable.stop();
    }

    match session.current_profile_mut() {
        Some(profile) => {
            profile.add_to_watch_history(id.clone(), percent);
            output.success(format!(
                "Recorded a session of {} at {:.0}%",
                title,
                profile.watch_progress(&id)
            ));
        }
        None => output.error("No profile selected; the session was not recorded"),
    }
    Ok(())
}

fn manage_downloads(session: &mut Session, output: &Output) -> Result<()> {
    let Some(id) = select_title(
        session,
        Content::supports_download,
        "Pick a downloadable title",
    )?
    else {
        output.warn("Nothing in the catalog supports downloads");
        return Ok(());
    };
    let title = title_for(session, &id);

    let Some(download) = session
        .catalog_mut()
        .get_mut(&id)
        .and_then(|content| content.as_downloadable_mut())
    else {
        return Ok(());
    };

    output.info(format!(
        "{}: {} at {} ({})",
        title,
        format_size(download.download_size()),
        download.download_quality(),
        download.download_state().label()
    ));

    loop {
        let action = prompts::prompt_select("Download actions", &["Start", "Pause", "Resume", "Back"])?;
        match action {
            0 => download.start_download(),
            1 => download.pause_download(),
            2 => download.resume_download(),
            _ => break,
        }
        output.success(format!(
            "{}: {}",
            title,
            download.download_state().label()
        ));
    }
    Ok(())
}

fn rate_title(session: &mut Session, output: &Output) -> Result<()> {
    let Some(id) = select_title(session, |_| true, "Rate which title?")? else {
        output.warn("The catalog is empty");
        return Ok(());
    };
    let title = title_for(session, &id);
    let user = session.current_profile().map(|p| p.id().clone());

    let value = prompts::prompt_float("Rating (0-5)", None)?;

    let Some(content) = session.catalog_mut().get_mut(&id) else {
        return Ok(());
    };

    match content.add_rating(value) {
        Ok(()) => output.success(format!(
            "{} now rates {:.1} across {} ratings",
            title,
            content.rating(),
            content.rating_count()
        )),
        Err(e) => {
            output.error(e.to_string());
            return Ok(());
        }
    }

    // Documentaries additionally keep a per-profile rating.
    if let (Some(ratable), Some(user)) = (content.as_ratable_mut(), user) {
        let prompt = if ratable.has_user_rated(&user) {
            "Replace your previous personal rating with this one?"
        } else {
            "Record this as your personal rating too?"
        };
        if prompts::prompt_yes_no(prompt, Some(true))? {
            match ratable.add_user_rating(&user, value) {
                Ok(()) => output.info(format!(
                    "Personal viewer average is now {:.1}",
                    ratable.average_rating()
                )),
                Err(e) => output.error(e.to_string()),
            }
        }
    }
    Ok(())
}

fn manage_watchlist(session: &mut Session, output: &Output) -> Result<()> {
    if session.current_profile().is_none() {
        output.error("No profile selected");
        return Ok(());
    }

    let action = prompts::prompt_select(
        "Watchlist",
        &["View watchlist", "Add a title", "Remove a title", "Back"],
    )?;
    match action {
        0 => view_watchlist(session, output),
        1 => add_to_watchlist(session, output)?,
        2 => remove_from_watchlist(session, output)?,
        _ => {}
    }
    Ok(())
}

fn view_watchlist(session: &Session, output: &Output) {
    let Some(profile) = session.current_profile() else {
        return;
    };
    if profile.watchlist().is_empty() {
        output.info(format!("{}'s watchlist is empty", profile.name()));
        return;
    }

    let mut table = new_table(&["Title", "Kind", "Duration", "Progress"]);
    for id in profile.watchlist() {
        let Some(content) = session.catalog().get(id) else {
            continue;
        };
        table.add_row(vec![
            content.title().to_string(),
            content.kind().to_string(),
            content.duration(),
            format!("{:.0}%", profile.watch_progress(id)),
        ]);
    }
    println!("{}", table);
}

fn add_to_watchlist(session: &mut Session, output: &Output) -> Result<()> {
    let Some(id) = select_title(session, |_| true, "Add which title?")? else {
        output.warn("The catalog is empty");
        return Ok(());
    };
    let title = title_for(session, &id);

    let Some(profile) = session.current_profile_mut() else {
        return Ok(());
    };
    if profile.add_to_watchlist(&id) {
        let name = profile.name().to_string();
        output.success(format!("Added {} to {}'s watchlist", title, name));
    } else {
        output.info(format!("{} is already on the watchlist", title));
    }
    Ok(())
}

fn remove_from_watchlist(session: &mut Session, output: &Output) -> Result<()> {
    let Some(profile) = session.current_profile() else {
        return Ok(());
    };
    if profile.watchlist().is_empty() {
        output.info(format!("{}'s watchlist is empty", profile.name()));
        return Ok(());
    }

    let labels: Vec<String> = profile
        .watchlist()
        .iter()
        .map(|id| title_for(session, id))
        .collect();
    let index = prompts::prompt_select("Remove which title?", &labels)?;
    let id = profile.watchlist()[index].clone();
    let title = labels[index].clone();

    let Some(profile) = session.current_profile_mut() else {
        return Ok(());
    };
    if profile.remove_from_watchlist(&id) {
        let name = profile.name().to_string();
        output.success(format!("Removed {} from {}'s watchlist", title, name));
    }
    Ok(())
}

fn view_watch_history(session: &mut Session, output: &Output) -> Result<()> {
    {
        let Some(profile) = session.current_profile() else {
            output.error("No profile selected");
            return Ok(());
        };
        if profile.watch_history().is_empty() {
            output.info(format!("{} has not watched anything yet", profile.name()));
            return Ok(());
        }

        let mut table = new_table(&["Title", "Watched at", "Progress"]);
        for entry in profile.watch_history() {
            table.add_row(vec![
                title_for(session, entry.content_id()),
                entry.watched_at().format("%Y-%m-%d %H:%M").to_string(),
                format!("{:.0}%", entry.watched_percent()),
            ]);
        }
        println!("{}", table);
    }

    if prompts::prompt_yes_no("Correct the progress of a recent session?", Some(false))? {
        let Some(id) = select_title(session, |_| true, "Which title?")? else {
            return Ok(());
        };
        let percent = prompts::prompt_float("New progress in percent", None)?;
        let Some(profile) = session.current_profile_mut() else {
            return Ok(());
        };
        if profile.update_watch_progress(&id, percent) {
            output.success(format!("Progress is now {:.0}%", profile.watch_progress(&id)));
        } else {
            output.warn("No watch session recorded for that title");
        }
    }
    Ok(())
}

fn manage_profiles(session: &mut Session, output: &Output) -> Result<()> {
    {
        let current_id = session.current_profile().map(|p| p.id().clone());
        let mut table = new_table(&["Name", "Type", "Watchlist", "Avatar"]);
        for profile in session.profiles() {
            let name_cell = if Some(profile.id()) == current_id.as_ref() {
                Cell::new(profile.name()).fg(comfy_table::Color::Green)
            } else {
                Cell::new(profile.name())
            };
            table.add_row(vec![
                name_cell,
                Cell::new(if profile.is_kids_profile() { "Kids" } else { "Adult" }),
                Cell::new(profile.watchlist().len()),
                Cell::new(profile.avatar()),
            ]);
        }
        println!("{}", table);
    }

    match prompts::prompt_select(
        "Profiles",
        &["Switch profile", "Create a new profile", "Back"],
    )? {
        0 => switch_profile(session, output)?,
        1 => create_profile(session, output)?,
        _ => {}
    }
    Ok(())
}

fn switch_profile(session: &mut Session, output: &Output) -> Result<()> {
    let labels: Vec<String> = session
        .profiles()
        .iter()
        .map(|profile| profile.name().to_string())
        .collect();
    let index = prompts::prompt_select("Select profile", &labels)?;
    let id = session.profiles()[index].id().clone();
    if session.switch_profile(&id) {
        output.success(format!("Switched to profile: {}", labels[index]));
    }
    Ok(())
}

fn create_profile(session: &mut Session, output: &Output) -> Result<()> {
    let name = prompts::prompt_string("Profile name", None)?;
    let kids = prompts::prompt_yes_no("Is this a kids profile?", Some(false))?;
    let id = ProfileId::new(format!("P{}", session.profiles().len() + 1));

    match Profile::new(id, name) {
        Ok(profile) => {
            let profile = profile.with_kids_profile(kids);
            let name = profile.name().to_string();
            match session.add_profile(profile) {
                Ok(()) => output.success(format!("Created new profile: {}", name)),
                Err(e) => output.error(e.to_string()),
            }
        }
        Err(e) => output.error(e.to_string()),
    }
    Ok(())
}
