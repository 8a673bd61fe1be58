//! Pure text rendering for the leaderboard channel.

use std::fmt::Write;

use entity::session::Status;

use crate::{
    model::leaderboard::{LeaderboardEntry, StatusLayout},
    util::duration::format_duration,
};

/// Maximum characters in a Discord message.
pub const MESSAGE_LIMIT: usize = 2000;

/// Room kept free for the overflow trailer.
const TRAILER_RESERVE: usize = 32;

/// Sorts entries by live online time descending, then by user id.
pub fn rank(entries: &mut [LeaderboardEntry]) {
    entries.sort_by(|a, b| {
        b.totals
            .online
            .cmp(&a.totals.online)
            .then(a.user_id.cmp(&b.user_id))
    });
}

/// Renders the ranked leaderboard block.
///
/// Entries are expected to be ranked already.
pub fn render_leaderboard(entries: &[LeaderboardEntry]) -> String {
    let header = "**__Leaderboard__**";

    if entries.is_empty() {
        return format!("{}\nNo activity recorded yet.", header);
    }

    let lines = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            format!(
                "**{}. {}** | Online: `{}` | AFK: `{}`",
                index + 1,
                entry.name,
                format_duration(entry.totals.online),
                format_duration(entry.totals.afk)
            )
        })
        .collect::<Vec<_>>();

    fit_message(header, &lines)
}

/// Renders the live status block in the requested layout.
pub fn render_status(entries: &[LeaderboardEntry], layout: StatusLayout) -> String {
    let header = "**Live Status:**";

    if entries.is_empty() {
        return format!("{}\nNo members tracked yet.", header);
    }

    let lines = match layout {
        StatusLayout::Flat => entries
            .iter()
            .map(|entry| format!("{} → `{}`", entry.name, entry.status.label()))
            .collect::<Vec<_>>(),
        StatusLayout::Grouped => {
            let mut lines = Vec::new();
            for (status, heading) in [
                (Status::Online, "🟢 **Online**"),
                (Status::Afk, "🟡 **AFK**"),
                (Status::Offline, "🔴 **Offline**"),
            ] {
                let members: Vec<&LeaderboardEntry> =
                    entries.iter().filter(|e| e.status == status).collect();

                lines.push(format!("{} ({})", heading, members.len()));
                if members.is_empty() {
                    lines.push("- nobody".to_string());
                }
                lines.extend(members.iter().map(|e| format!("- {}", e.name)));
            }
            lines
        }
    };

    fit_message(header, &lines)
}

/// Joins `header` and `lines`, dropping trailing lines that would overflow the
/// message limit and noting how many were left out.
fn fit_message(header: &str, lines: &[String]) -> String {
    let mut output = header.to_string();
    let mut used = output.chars().count();

    for (index, line) in lines.iter().enumerate() {
        let cost = line.chars().count() + 1;
        let reserve = if index + 1 < lines.len() {
            TRAILER_RESERVE
        } else {
            0
        };

        if used + cost + reserve > MESSAGE_LIMIT {
            let _ = write!(output, "\n…and {} more", lines.len() - index);
            return output;
        }

        output.push('\n');
        output.push_str(line);
        used += cost;
    }

    output
}
