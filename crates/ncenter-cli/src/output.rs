//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use ncenter_core::internal::model::{InternalNotification, InternalPriority};
use ncenter_core::notification::model::{Notification, NotificationStatus, Priority};
use ncenter_core::NotificationStats;
use unicode_width::UnicodeWidthStr;

/// Fixed columns of the notification table: id, status, priority, type, assignee and gaps.
const FIXED_COLUMNS_WIDTH: usize = 6 + 10 + 8 + 15 + 16 + 7;

/// Print notifications as a table.
pub fn print_notifications_table<N: AsRef<Notification>>(notifications: &[N]) {
    if notifications.is_empty() {
        println!("{}", "No notifications match the current filters.".dimmed());
        return;
    }

    let title_width = term_width()
        .saturating_sub(FIXED_COLUMNS_WIDTH)
        .clamp(20, 60);

    println!(
        "  {:<6} {} {:<10} {:<8} {:<15} {}",
        "ID",
        pad_right("Title", title_width),
        "Status",
        "Priority",
        "Type",
        "Assignee"
    );
    println!("{}", "─".repeat(title_width + FIXED_COLUMNS_WIDTH));

    for n in notifications {
        let n = n.as_ref();
        let marker = if n.read { " ".normal() } else { "●".cyan() };
        let title = pad_right(&truncate_visual(&n.title, title_width), title_width);
        let title = if n.read { title.normal() } else { title.bold() };

        println!(
            "{} {:<6} {} {} {} {:<15} {}",
            marker,
            n.id,
            title,
            status_colored(n.status, 10),
            priority_colored(n.priority, 8),
            n.kind.as_str(),
            n.assigned_to.as_deref().unwrap_or("-")
        );
    }

    println!();
    println!("{} notification(s)", notifications.len());
}

/// Print a single notification with its history.
pub fn print_notification(n: &Notification) {
    println!("{} {}", n.title.cyan().bold(), format!("({})", n.id).dimmed());
    println!();
    println!("{}", n.message);
    println!();

    println!("{}: {}", "Status".bold(), status_colored(n.status, 0));
    println!("{}: {}", "Priority".bold(), priority_colored(n.priority, 0));
    println!("{}: {}", "Type".bold(), n.kind);
    println!("{}: {}", "Source".bold(), n.source);
    if let Some(department) = n.department {
        println!("{}: {}", "Department".bold(), department);
    }
    println!("{}: {}", "Read".bold(), if n.read { "yes" } else { "no" });
    println!("{}: {}", "Created".bold(), n.timestamp.format("%Y-%m-%d %H:%M"));

    if let Some(level) = n.escalation_level {
        println!("{}: {}", "Escalation".bold(), format!("level {}", level).red());
    }
    if let Some(assignee) = &n.assigned_to {
        match &n.assigned_by {
            Some(by) => println!("{}: {} (by {})", "Assigned to".bold(), assignee, by),
            None => println!("{}: {}", "Assigned to".bold(), assignee),
        }
    }
    if let Some(until) = n.snooze_until {
        println!("{}: {}", "Snoozed until".bold(), until.format("%Y-%m-%d %H:%M"));
    }
    if let Some(at) = n.resolved_at {
        let by = n.resolved_by.as_deref().unwrap_or("unknown");
        println!("{}: {} by {}", "Resolved".bold(), at.format("%Y-%m-%d %H:%M"), by);
    }
    if !n.tags.is_empty() {
        println!("{}: {}", "Tags".bold(), n.tags.join(", "));
    }
    if let Some(entity) = &n.related_entity {
        println!(
            "{}: {} {} {}",
            "Related".bold(),
            entity.kind,
            entity.name,
            format!("({})", entity.id).dimmed()
        );
    }

    println!();
    println!("{}", "Audit Trail".bold());
    for entry in &n.audit_trail {
        println!(
            "  {} {:<9} {}{}",
            entry.timestamp.format("%Y-%m-%d %H:%M").to_string().dimmed(),
            entry.action.as_str(),
            entry.user,
            entry
                .details
                .as_deref()
                .map(|d| format!(" {}", format!("- {}", d).dimmed()))
                .unwrap_or_default()
        );
    }
}

/// Print the header statistics.
pub fn print_stats(stats: &NotificationStats) {
    println!("{}", "Notification Overview".bold());
    println!();
    println!("  {:<10} {}", "Total", stats.total);
    println!("  {:<10} {}", "Unread", count_colored(stats.unread, |s| s.cyan()));
    println!("  {:<10} {}", "Urgent", count_colored(stats.urgent, |s| s.red().bold()));
    println!("  {:<10} {}", "Assigned", count_colored(stats.assigned, |s| s.yellow()));
    println!("  {:<10} {}", "Snoozed", count_colored(stats.snoozed, |s| s.blue()));
    println!("  {:<10} {}", "Resolved", count_colored(stats.resolved, |s| s.green()));
}

/// Print the header notification list.
pub fn print_inbox(items: &[InternalNotification]) {
    if items.is_empty() {
        println!("{}", "No notifications.".dimmed());
        return;
    }

    let unread = items.iter().filter(|n| !n.is_read).count();
    println!("{} {}", "Notifications".bold(), format!("({} unread)", unread).dimmed());
    println!();

    for item in items {
        let marker = if item.is_read { " ".normal() } else { "●".cyan() };
        let priority = match item.priority {
            InternalPriority::High => "high".red(),
            InternalPriority::Medium => "medium".yellow(),
            InternalPriority::Low => "low".dimmed(),
        };
        println!(
            "{} {} {} [{}] {}",
            marker,
            item.title.bold(),
            format!("({})", item.id).dimmed(),
            item.kind,
            priority
        );
        println!("    {}", item.message);
        let mut meta = format!("{} · {}", item.category, item.created_at.format("%Y-%m-%d %H:%M"));
        if let Some(url) = &item.action_url {
            meta.push_str(&format!(" · {}", url));
        }
        println!("    {}", meta.dimmed());
    }
}

fn status_colored(status: NotificationStatus, width: usize) -> ColoredString {
    let label = pad_right(status.as_str(), width);
    match status {
        NotificationStatus::New => label.cyan(),
        NotificationStatus::Assigned => label.yellow(),
        NotificationStatus::Snoozed => label.blue(),
        NotificationStatus::Resolved => label.green(),
        NotificationStatus::Archived => label.dimmed(),
    }
}

fn priority_colored(priority: Priority, width: usize) -> ColoredString {
    let label = pad_right(priority.as_str(), width);
    match priority {
        Priority::Urgent => label.red().bold(),
        Priority::High => label.yellow(),
        Priority::Medium => label.normal(),
        Priority::Low => label.dimmed(),
    }
}

fn count_colored(count: usize, paint: impl Fn(&str) -> ColoredString) -> ColoredString {
    let text = count.to_string();
    if count == 0 {
        text.dimmed()
    } else {
        paint(&text)
    }
}

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Truncate a string respecting visual width.
fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width - 2 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("..");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_right_counts_visual_width() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_right("Müller", 8), "Müller  ");
        assert_eq!(pad_right("toolong", 3), "toolong");
    }

    #[test]
    fn test_truncate_visual() {
        assert_eq!(truncate_visual("short", 10), "short");
        assert_eq!(truncate_visual("Business Central sync failed", 10), "Business..");
        assert_eq!(truncate_visual("abcdef", 3), "...");
    }
}
