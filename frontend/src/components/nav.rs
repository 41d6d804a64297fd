use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Grid,
    Team,
    AddPerson,
    Calendar,
    Plus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: NavIcon,
    /// Exact links are active only on their own path; the rest also match sub-paths.
    pub exact: bool,
}

impl NavItem {
    pub fn is_active(&self, path: &str) -> bool {
        let path = normalize_path(path);
        if self.exact {
            return path == self.href;
        }
        path == self.href
            || path
                .strip_prefix(self.href)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

pub const SIDEBAR_LINKS: &[NavItem] = &[
    NavItem {
        href: "/",
        label: "Dashboard",
        icon: NavIcon::Grid,
        exact: true,
    },
    NavItem {
        href: "/employees",
        label: "Employees",
        icon: NavIcon::Team,
        exact: false,
    },
    NavItem {
        href: "/employees/add",
        label: "Add Employee",
        icon: NavIcon::AddPerson,
        exact: false,
    },
    NavItem {
        href: "/attendance",
        label: "Attendance",
        icon: NavIcon::Calendar,
        exact: false,
    },
];

pub const MOBILE_LINKS: &[NavItem] = &[
    NavItem {
        href: "/",
        label: "Home",
        icon: NavIcon::Grid,
        exact: true,
    },
    NavItem {
        href: "/employees",
        label: "Team",
        icon: NavIcon::Team,
        exact: true,
    },
    NavItem {
        href: "/attendance",
        label: "Attend",
        icon: NavIcon::Calendar,
        exact: false,
    },
    NavItem {
        href: "/employees/add",
        label: "Add",
        icon: NavIcon::Plus,
        exact: false,
    },
];

pub fn nav_icon(icon: NavIcon, size: u32) -> View {
    let size = size.to_string();
    match icon {
        NavIcon::Grid => view! {
            <svg width=size.clone() height=size viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <rect x="3" y="3" width="7" height="7" rx="1"/>
                <rect x="14" y="3" width="7" height="7" rx="1"/>
                <rect x="3" y="14" width="7" height="7" rx="1"/>
                <rect x="14" y="14" width="7" height="7" rx="1"/>
            </svg>
        }
        .into_view(),
        NavIcon::Team => view! {
            <svg width=size.clone() height=size viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2"/>
                <circle cx="9" cy="7" r="4"/>
                <path d="M23 21v-2a4 4 0 0 0-3-3.87"/>
                <path d="M16 3.13a4 4 0 0 1 0 7.75"/>
            </svg>
        }
        .into_view(),
        NavIcon::AddPerson => view! {
            <svg width=size.clone() height=size viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M16 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2"/>
                <circle cx="8.5" cy="7" r="4"/>
                <line x1="20" y1="8" x2="20" y2="14"/>
                <line x1="23" y1="11" x2="17" y2="11"/>
            </svg>
        }
        .into_view(),
        NavIcon::Calendar => view! {
            <svg width=size.clone() height=size viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <rect x="3" y="4" width="18" height="18" rx="2" ry="2"/>
                <line x1="16" y1="2" x2="16" y2="6"/>
                <line x1="8" y1="2" x2="8" y2="6"/>
                <line x1="3" y1="10" x2="21" y2="10"/>
                <path d="M9 16l2 2 4-4"/>
            </svg>
        }
        .into_view(),
        NavIcon::Plus => view! {
            <svg width=size.clone() height=size viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <line x1="12" y1="5" x2="12" y2="19"/>
                <line x1="5" y1="12" x2="19" y2="12"/>
            </svg>
        }
        .into_view(),
    }
}

#[component]
pub fn Sidebar(#[prop(into)] path: Signal<String>) -> impl IntoView {
    view! {
        <aside class="hidden lg:flex lg:flex-col w-64 shrink-0 min-h-screen bg-surface-elevated border-r border-border">
            <div class="flex items-center gap-3 px-6 h-16 border-b border-border">
                <div class="w-9 h-9 rounded-xl bg-action-primary-bg text-action-primary-text flex items-center justify-center font-bold">
                    "H"
                </div>
                <div>
                    <h1 class="text-base font-semibold text-fg">"HRMS Lite"</h1>
                    <span class="text-xs text-fg-muted">"Management System"</span>
                </div>
            </div>
            <nav class="flex-1 px-3 py-4 space-y-1">
                <div class="px-3 pb-2 text-xs font-semibold uppercase tracking-wider text-fg-muted">"Menu"</div>
                {SIDEBAR_LINKS
                    .iter()
                    .map(|item| {
                        let item = *item;
                        let active = move || item.is_active(&path.get());
                        view! {
                            <a
                                href=item.href
                                class=move || {
                                    if active() {
                                        "flex items-center gap-3 px-3 py-2 rounded-md text-sm font-medium bg-action-primary-bg text-action-primary-text"
                                    } else {
                                        "flex items-center gap-3 px-3 py-2 rounded-md text-sm font-medium text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                                    }
                                }
                                aria-current=move || active().then_some("page")
                            >
                                <span class="shrink-0">{nav_icon(item.icon, 18)}</span>
                                {item.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

#[component]
pub fn MobileNav(#[prop(into)] path: Signal<String>) -> impl IntoView {
    view! {
        <div class="lg:hidden fixed bottom-0 inset-x-0 z-40 bg-surface-elevated border-t border-border">
            <nav class="grid grid-cols-4">
                {MOBILE_LINKS
                    .iter()
                    .map(|item| {
                        let item = *item;
                        let active = move || item.is_active(&path.get());
                        view! {
                            <a
                                href=item.href
                                class=move || {
                                    if active() {
                                        "flex flex-col items-center gap-1 py-2 text-xs font-medium text-action-primary-bg"
                                    } else {
                                        "flex flex-col items-center gap-1 py-2 text-xs font-medium text-fg-muted"
                                    }
                                }
                                aria-current=move || active().then_some("page")
                            >
                                {nav_icon(item.icon, 20)}
                                {item.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(links: &[NavItem], label: &str) -> NavItem {
        *links.iter().find(|l| l.label == label).unwrap()
    }

    #[test]
    fn dashboard_link_matches_root_only() {
        let dashboard = link(SIDEBAR_LINKS, "Dashboard");
        assert!(dashboard.is_active("/"));
        assert!(!dashboard.is_active("/employees"));
        assert!(!dashboard.is_active("/attendance"));
    }

    #[test]
    fn prefix_links_cover_nested_paths() {
        let employees = link(SIDEBAR_LINKS, "Employees");
        assert!(employees.is_active("/employees"));
        assert!(employees.is_active("/employees/"));
        assert!(employees.is_active("/employees/EMP001"));
        assert!(employees.is_active("/employees/add"));
        assert!(!employees.is_active("/employeesX"));
        assert!(!employees.is_active("/attendance"));
    }

    #[test]
    fn mobile_team_link_is_exact() {
        let team = link(MOBILE_LINKS, "Team");
        assert!(team.is_active("/employees"));
        assert!(team.is_active("/employees?q=1"));
        assert!(!team.is_active("/employees/add"));
        assert!(!team.is_active("/employees/EMP001"));
    }

    #[test]
    fn link_lists_have_expected_targets() {
        let sidebar: Vec<_> = SIDEBAR_LINKS.iter().map(|l| l.href).collect();
        assert_eq!(sidebar, vec!["/", "/employees", "/employees/add", "/attendance"]);
        let mobile: Vec<_> = MOBILE_LINKS.iter().map(|l| (l.label, l.href)).collect();
        assert_eq!(
            mobile,
            vec![
                ("Home", "/"),
                ("Team", "/employees"),
                ("Attend", "/attendance"),
                ("Add", "/employees/add"),
            ]
        );
    }
}
