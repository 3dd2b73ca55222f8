use leptos::prelude::*;

struct Stat {
    icon: &'static str,
    accent: &'static str,
    title: &'static str,
    value: &'static str,
    desc: &'static str,
}

// Display data is static for now; the dashboard has no live feed yet.
static STATS: [Stat; 3] = [
    Stat {
        icon: "🔄",
        accent: "text-primary",
        title: "Total Sessions",
        value: "89",
        desc: "21% more than last month",
    },
    Stat {
        icon: "📤",
        accent: "text-secondary",
        title: "Shared Notes",
        value: "47",
        desc: "↗︎ 40 (22%)",
    },
    Stat {
        icon: "🎵",
        accent: "text-accent",
        title: "Music Notes",
        value: "12",
        desc: "Just added",
    },
];

#[component]
pub fn ProfileNav() -> impl IntoView {
    view! {
        <header class="px-4 shadow-md navbar bg-base-100 sm:px-8">
            <div class="flex-1">
                <a href="/" class="text-2xl font-bold text-transparent bg-gradient-to-r from-primary to-secondary bg-clip-text">
                    "Notedown"
                </a>
            </div>
            <div class="flex-none gap-4">
                <button class="btn btn-ghost btn-circle">
                    <span class="text-xl">"🔔"</span>
                </button>
                <button class="btn btn-ghost btn-circle avatar placeholder">
                    <div class="w-10 rounded-full ring ring-primary ring-offset-base-100 ring-offset-2 bg-neutral text-neutral-content">
                        <span>"👤"</span>
                    </div>
                </button>
            </div>
        </header>
    }
}

#[component]
pub fn ProfileHero(username: Signal<String>) -> impl IntoView {
    view! {
        <section class="px-4 py-12 bg-base-100 sm:px-8">
            <div class="max-w-4xl mx-auto">
                <div class="flex flex-col items-center justify-between gap-6 sm:flex-row">
                    <div class="flex items-center gap-4">
                        <div class="avatar placeholder">
                            <div class="w-20 rounded-full ring ring-primary ring-offset-base-100 ring-offset-2 bg-neutral text-neutral-content">
                                <span class="text-3xl">"👤"</span>
                            </div>
                        </div>
                        <div>
                            <h2 class="text-3xl font-bold">"Welcome, " {username} "!"</h2>
                            <p class="text-base-content/70">"Premium Member"</p>
                        </div>
                    </div>
                    <div class="flex gap-2">
                        <button class="btn btn-primary">"⚙️ Settings"</button>
                        <button class="btn btn-outline">"📊 Analytics"</button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn StatCards() -> impl IntoView {
    view! {
        <section class="px-4 py-8 sm:px-8">
            <div class="max-w-4xl mx-auto">
                <div class="w-full shadow stats stats-vertical lg:stats-horizontal">
                    {STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="stat">
                                    <div class=format!("stat-figure text-2xl {}", stat.accent)>
                                        {stat.icon}
                                    </div>
                                    <div class="stat-title">{stat.title}</div>
                                    <div class="stat-value">{stat.value}</div>
                                    <div class="stat-desc">{stat.desc}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn NotesOverview() -> impl IntoView {
    view! {
        <section class="px-4 py-8 sm:px-8">
            <div class="max-w-4xl mx-auto">
                <h3 class="mb-6 text-2xl font-bold">"Your Notes"</h3>
                <div class="grid grid-cols-1 gap-6 md:grid-cols-2">
                    <div class="shadow-xl card bg-base-100">
                        <div class="card-body">
                            <div class="flex items-center justify-between">
                                <h4 class="card-title">"🔒 Private Notes"</h4>
                                <span class="badge badge-primary badge-lg">"25"</span>
                            </div>
                            <div class="divider"></div>
                            <div class="space-y-2">
                                <p class="text-sm text-base-content/70">"Last edited 2 hours ago"</p>
                                <div class="flex justify-end">
                                    <button class="btn btn-primary btn-sm">"View All"</button>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="shadow-xl card bg-base-100">
                        <div class="card-body">
                            <div class="flex items-center justify-between">
                                <h4 class="card-title">"📤 Shared Notes"</h4>
                                <span class="badge badge-secondary badge-lg">"12"</span>
                            </div>
                            <div class="divider"></div>
                            <div class="space-y-2">
                                <p class="text-sm text-base-content/70">"Last shared yesterday"</p>
                                <div class="flex justify-end">
                                    <button class="btn btn-secondary btn-sm">"View All"</button>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn QuickActions() -> impl IntoView {
    view! {
        <section class="px-4 py-8 sm:px-8">
            <div class="max-w-4xl mx-auto">
                <div class="shadow-xl card bg-base-100">
                    <div class="card-body">
                        <h3 class="card-title">"Quick Actions"</h3>
                        <div class="flex flex-wrap gap-4 mt-4">
                            <button class="gap-2 btn btn-outline">"Update Profile"</button>
                            <button class="gap-2 btn btn-outline">"Change Password"</button>
                            <button class="gap-2 btn btn-outline">"Preferences"</button>
                            <button class="gap-2 btn btn-error btn-outline">"Delete Account"</button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ProfileFooter() -> impl IntoView {
    view! {
        <footer class="p-8 rounded footer footer-center bg-base-200 text-base-content">
            <div class="flex gap-4 text-xl">
                <span>"🔄"</span>
                <span>"🎵"</span>
            </div>
            <div>
                <p>"Copyright © 2024 - All rights reserved by Notedown"</p>
            </div>
        </footer>
    }
}
