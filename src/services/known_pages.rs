//! Static table of pages whose visits show up in recent activity.

use crate::types::page::PageInfo;

const KNOWN_PAGES: &[PageInfo] = &[
    PageInfo { path: "/dashboard", label: "Viewed Dashboard", icon: "mdi-view-dashboard" },
    PageInfo { path: "/resume", label: "Explored Resume Tips", icon: "mdi-file-document" },
    PageInfo { path: "/resume/templates", label: "Browsed Resume Templates", icon: "mdi-file-document-multiple" },
    PageInfo { path: "/resume/cover-letter", label: "Read Cover Letter Guide", icon: "mdi-email-edit" },
    PageInfo { path: "/resume/ats", label: "Checked ATS Optimization", icon: "mdi-robot" },
    PageInfo { path: "/interview", label: "Explored Interview Prep", icon: "mdi-account-voice" },
    PageInfo { path: "/interview/questions", label: "Practiced Interview Questions", icon: "mdi-help-circle" },
    PageInfo { path: "/interview/simulation", label: "Ran Interview Simulation", icon: "mdi-play-circle" },
    PageInfo { path: "/networking", label: "Explored Networking", icon: "mdi-account-group" },
    PageInfo { path: "/networking/templates", label: "Viewed Networking Templates", icon: "mdi-message-text" },
    PageInfo { path: "/job-search", label: "Explored Job Search", icon: "mdi-briefcase-search" },
    PageInfo { path: "/job-search/platforms", label: "Compared Job Platforms", icon: "mdi-web" },
    PageInfo { path: "/job-search/salary", label: "Researched Salary Negotiation", icon: "mdi-cash" },
    PageInfo { path: "/job-search/scams", label: "Reviewed Job Scam Warnings", icon: "mdi-alert" },
    PageInfo { path: "/self-promotion", label: "Explored Self-Promotion", icon: "mdi-bullhorn" },
    PageInfo { path: "/self-promotion/linkedin", label: "Optimized LinkedIn Profile", icon: "mdi-linkedin" },
    PageInfo { path: "/self-promotion/workplace", label: "Read Workplace Visibility Tips", icon: "mdi-office-building" },
    PageInfo { path: "/chat", label: "Chatted with Career Buddy", icon: "mdi-chat" },
    PageInfo { path: "/help", label: "Visited Help Center", icon: "mdi-lifebuoy" },
    PageInfo { path: "/settings", label: "Updated Settings", icon: "mdi-cog" },
];

/// Returns every known page in menu order.
pub fn all() -> &'static [PageInfo] {
    KNOWN_PAGES
}

/// Looks up display metadata for an already-normalized path.
pub fn lookup(path: &str) -> Option<&'static PageInfo> {
    KNOWN_PAGES.iter().find(|page| page.path == path)
}

/// Reduces a raw route to the form used as a table key: query string and
/// fragment dropped, leading slash enforced, trailing slashes trimmed.
pub fn normalize_path(raw: &str) -> String {
    let end = raw.find(|c| c == '?' || c == '#').unwrap_or(raw.len());
    let trimmed = raw[..end].trim().trim_end_matches('/');

    if trimmed.is_empty() {
        return "/".to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
