pub mod global_context;
pub mod sidebar;
pub mod tabs;
pub mod top_header;

use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |    Tabs + contenido          |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div style="min-height: 100vh; display: flex; flex-direction: column; font-family: 'Roboto', sans-serif; background: #f1f2f6;">
            <top_header::TopHeader />

            <div style="display: flex; flex-grow: 1;">
                <sidebar::Sidebar />

                <main style="flex-grow: 1; padding: 1rem 2rem; min-width: 0;">
                    <tabs::TabBar />
                    <tabs::TabContent />
                </main>
            </div>
        </div>
    }
}
