//! Shared test utilities used across epinet crates.

pub mod tracing {
    //! Recording layer for asserting spans and events in tests.
    use std::collections::BTreeMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::Context;
    use tracing_subscriber::registry::LookupSpan;

    /// Structured fields captured from a span or event, keyed by field name.
    pub type Fields = BTreeMap<String, String>;

    /// Layer that stores closed spans and emitted events so tests can assert
    /// on instrumentation after the fact.
    ///
    /// Clones share the same storage, so a clone can be installed in a
    /// subscriber while the original is kept for inspection.
    #[derive(Clone, Default)]
    pub struct RecordingLayer {
        recorded: Arc<Mutex<Recorded>>,
    }

    #[derive(Default)]
    struct Recorded {
        spans: Vec<SpanRecord>,
        events: Vec<EventRecord>,
    }

    impl RecordingLayer {
        /// Closed spans in completion order.
        ///
        /// # Examples
        /// ```
        /// use epinet_test_support::tracing::RecordingLayer;
        ///
        /// assert!(RecordingLayer::default().spans().is_empty());
        /// ```
        #[must_use]
        pub fn spans(&self) -> Vec<SpanRecord> {
            self.lock().spans.clone()
        }

        /// Emitted events in emission order.
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            self.lock().events.clone()
        }

        /// First closed span called `name`, if any.
        #[must_use]
        pub fn span_named(&self, name: &str) -> Option<SpanRecord> {
            self.lock()
                .spans
                .iter()
                .find(|span| span.name == name)
                .cloned()
        }

        /// Events whose `message` field equals `message`.
        #[must_use]
        pub fn events_with_message(&self, message: &str) -> Vec<EventRecord> {
            self.lock()
                .events
                .iter()
                .filter(|event| event.message() == Some(message))
                .cloned()
                .collect()
        }

        fn lock(&self) -> MutexGuard<'_, Recorded> {
            self.recorded
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
        }
    }

    /// Snapshot of a closed span.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SpanRecord {
        /// Span name from the tracing metadata.
        pub name: String,
        /// Fields recorded at creation or later through `Span::record`.
        pub fields: Fields,
    }

    /// Snapshot of an emitted event.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct EventRecord {
        /// Level the event was emitted at.
        pub level: Level,
        /// Target from the event metadata.
        pub target: String,
        /// Fields attached to the event, including `message`.
        pub fields: Fields,
    }

    impl EventRecord {
        /// The event's formatted message, when it has one.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.fields.get("message").map(String::as_str)
        }
    }

    struct OpenSpan(SpanRecord);

    impl<S> Layer<S> for RecordingLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut fields = Fields::new();
            attrs.record(&mut FieldCollector(&mut fields));
            span.extensions_mut().insert(OpenSpan(SpanRecord {
                name: attrs.metadata().name().to_owned(),
                fields,
            }));
        }

        fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            if let Some(OpenSpan(record)) = span.extensions_mut().get_mut::<OpenSpan>() {
                values.record(&mut FieldCollector(&mut record.fields));
            }
        }

        fn on_close(&self, id: Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            let Some(OpenSpan(record)) = span.extensions_mut().remove::<OpenSpan>() else {
                return;
            };
            self.lock().spans.push(record);
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = Fields::new();
            event.record(&mut FieldCollector(&mut fields));
            let metadata = event.metadata();
            self.lock().events.push(EventRecord {
                level: *metadata.level(),
                target: metadata.target().to_owned(),
                fields,
            });
        }
    }

    struct FieldCollector<'a>(&'a mut Fields);

    impl FieldCollector<'_> {
        fn insert(&mut self, field: &Field, value: String) {
            self.0.insert(field.name().to_owned(), value);
        }
    }

    impl Visit for FieldCollector<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.insert(field, format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.insert(field, value.to_owned());
        }

        fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
            self.insert(field, value.to_string());
        }

        fn record_bool(&mut self, field: &Field, value: bool) {
            self.insert(field, value.to_string());
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.insert(field, value.to_string());
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.insert(field, value.to_string());
        }

        fn record_f64(&mut self, field: &Field, value: f64) {
            self.insert(field, value.to_string());
        }
    }

}

pub mod ci;
