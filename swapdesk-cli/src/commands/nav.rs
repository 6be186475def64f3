//! Nav command - switch the active section

use anyhow::Result;
use swapdesk_core::services::LogEvent;
use swapdesk_core::Section;

use super::{get_context, get_logger, log_event};
use crate::output;

pub fn run(section: &str) -> Result<()> {
    let logger = get_logger();
    let ctx = get_context()?;

    let section: Section = section.parse()?;
    ctx.view_service.show_section(section);
    log_event(
        &logger,
        LogEvent::new("section_opened").with_section(section.as_str()),
    );

    output::success(&format!("Now on the {section} section."));

    let nav = ctx.view_service.update_auth_ui();
    if section == Section::Admin && !nav.show_admin_nav {
        output::warning("Note: this section is not shown in your navigation.");
    }
    Ok(())
}
