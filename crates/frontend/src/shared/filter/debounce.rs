use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Счётчик поколений для отложенного вызова
///
/// Срабатывает только последний запланированный вызов.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebounceGate {
    generation: u64,
}

impl DebounceGate {
    /// Запланировать вызов; возвращает его билет
    pub fn schedule(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation == ticket
    }
}

/// Trailing-debounce поверх таймера браузера
#[derive(Clone, Copy)]
pub struct Debouncer {
    gate: StoredValue<DebounceGate>,
    delay_ms: u32,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            gate: StoredValue::new(DebounceGate::default()),
            delay_ms,
        }
    }

    /// Выполнить `action` через `delay_ms`, если за это время не было
    /// нового вызова
    pub fn call(&self, action: impl FnOnce() + 'static) {
        let Some(ticket) = self.gate.try_update_value(|g| g.schedule()) else {
            return;
        };
        let gate = self.gate;
        let delay_ms = self.delay_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if gate.try_with_value(|g| g.is_current(ticket)).unwrap_or(false) {
                action();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_last_ticket_fires() {
        let mut gate = DebounceGate::default();
        let first = gate.schedule();
        let second = gate.schedule();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }
}
