//! Одноразовые уведомления (snackbar)

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const AUTO_HIDE_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// Очередь видимых уведомлений
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

/// Сервис уведомлений, раздаётся через контекст
#[derive(Clone, Copy)]
pub struct Notifications {
    queue: RwSignal<NotificationQueue>,
}

impl Notifications {
    pub fn provide() -> Self {
        let service = Self {
            queue: RwSignal::new(NotificationQueue::default()),
        };
        provide_context(service);
        service
    }

    pub fn use_notifications() -> Self {
        use_context::<Notifications>().expect("Notifications not provided")
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(NotificationKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(NotificationKind::Error, message.into());
    }

    fn show(&self, kind: NotificationKind, message: String) {
        let Some(id) = self.queue.try_update(|q| q.push(kind, message)) else {
            return;
        };
        let queue = self.queue;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_HIDE_MS).await;
            queue.try_update(|q| q.dismiss(id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

/// Показ уведомлений в углу экрана
#[component]
pub fn Snackbar() -> impl IntoView {
    let notifications = Notifications::use_notifications();

    view! {
        <div class="snackbar-stack">
            <For
                each=move || notifications.queue.with(|q| q.items().to_vec())
                key=|n| n.id
                children=move |n| {
                    let class = match n.kind {
                        NotificationKind::Success => "snackbar snackbar--success",
                        NotificationKind::Error => "snackbar snackbar--error",
                    };
                    let id = n.id;
                    view! {
                        <div class=class on:click=move |_| notifications.dismiss(id)>
                            {n.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_push_and_dismiss() {
        let mut queue = NotificationQueue::default();
        let first = queue.push(NotificationKind::Success, "Сохранено");
        let second = queue.push(NotificationKind::Error, "Ошибка");
        assert_ne!(first, second);
        assert_eq!(queue.items().len(), 2);

        queue.dismiss(first);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].message, "Ошибка");

        queue.dismiss(first);
        assert_eq!(queue.items().len(), 1);
    }
}
