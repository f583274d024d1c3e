use contracts::domain::a008_notification::aggregate::{unread_count, Notification};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a008_notification::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_resource::ListResource;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

fn unread_label(count: usize) -> String {
    match count {
        0 => "Nenhuma notificação nova".to_string(),
        1 => "1 notificação nova".to_string(),
        n => format!("{} notificações novas", n),
    }
}

/// Newest first
fn newest_first(mut items: Vec<Notification>) -> Vec<Notification> {
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    items
}

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let notifications = ListResource::<Notification>::new();
    let reload = move || {
        notifications.load(|| async { api::fetch_notifications().await.map(newest_first) })
    };
    reload();

    view! {
        <PageFrame page_id="a008_notification--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Notificações"</h1>
                    <span class="page__subtitle">
                        {move || notifications.items.with(|n| unread_label(unread_count(n)))}
                    </span>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| reload()>
                        {icon("refresh")}
                        " Atualizar"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || notifications.loading.get()>
                    <Spinner />
                </Show>
                <div class="notification-list">
                    <For
                        each=move || notifications.items.get()
                        key=|n| (n.id.clone(), n.read)
                        children=move |n: Notification| {
                            let class = if n.read { "notification" } else { "notification notification--unread" };
                            view! {
                                <Card class=class>
                                    <div class="notification__header">
                                        {icon("bell")}
                                        <span class="notification__title">{n.title.clone()}</span>
                                        {(!n.read).then(|| view! {
                                            <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Brand>"Nova"</Badge>
                                        })}
                                    </div>
                                    <p class="notification__message">{n.message.clone()}</p>
                                    <span class="notification__date">{format_datetime(&n.created_at)}</span>
                                </Card>
                            }
                        }
                    />
                </div>
                {move || (!notifications.loading.get() && notifications.is_empty()).then(|| view! {
                    <div class="table__empty">"Nenhuma notificação."</div>
                })}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unread_label_plural() {
        assert_eq!(unread_label(0), "Nenhuma notificação nova");
        assert_eq!(unread_label(1), "1 notificação nova");
        assert_eq!(unread_label(3), "3 notificações novas");
    }

    #[test]
    fn test_newest_first() {
        let items: Vec<Notification> = serde_json::from_str(
            r#"[{"id":"a","createdAt":"2024-01-01T00:00:00Z"},{"id":"b","createdAt":"2024-02-01T00:00:00Z"}]"#,
        )
        .unwrap();
        let ids: Vec<String> = newest_first(items).into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
