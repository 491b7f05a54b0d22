//! Logging support.
//!
//! With the `tracing` feature enabled, graph operations report through the
//! `tracing` crate and [`init_tracing`] installs a subscriber that prints
//! events to the test output and records how long each named span took.
//! Without the feature, the same names resolve to no-ops.

#[cfg(feature = "tracing")]
mod enabled {
    use std::{
        cell::RefCell,
        collections::BTreeMap,
        sync::Once,
        time::{Duration, Instant},
    };

    use tracing_subscriber::{
        Layer, Registry, filter::LevelFilter, fmt, layer::Context, layer::SubscriberExt,
        registry::LookupSpan, util::SubscriberInitExt,
    };

    thread_local! {
        static SPAN_TIMINGS: RefCell<BTreeMap<&'static str, (Duration, usize)>> =
            const { RefCell::new(BTreeMap::new()) };
    }

    struct TimingLayer;

    impl<S> Layer<S> for TimingLayer
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(
            &self,
            _attrs: &tracing::span::Attributes<'_>,
            id: &tracing::Id,
            ctx: Context<'_, S>,
        ) {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(Instant::now());
            }
        }

        fn on_close(&self, id: tracing::Id, ctx: Context<'_, S>) {
            if let Some(span) = ctx.span(&id) {
                let name = span.metadata().name();
                if let Some(start) = span.extensions().get::<Instant>() {
                    let elapsed = start.elapsed();
                    SPAN_TIMINGS.with(|totals| {
                        let mut totals = totals.borrow_mut();
                        let entry = totals.entry(name).or_insert((Duration::ZERO, 0));
                        entry.0 += elapsed;
                        entry.1 += 1;
                    });
                }
            }
        }
    }

    /// Installs the global subscriber.  Safe to call more than once; only the
    /// first call has an effect, and a subscriber installed by someone else is
    /// left alone.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = Registry::default()
                .with(TimingLayer)
                .with(
                    fmt::layer()
                        .with_test_writer()
                        .with_filter(LevelFilter::DEBUG),
                )
                .try_init();
        });
    }

    /// Gets the total duration and number of closed spans per span name,
    /// recorded on the current thread.
    #[doc(hidden)]
    pub fn span_timings() -> BTreeMap<&'static str, (Duration, usize)> {
        SPAN_TIMINGS.with(|totals| totals.borrow().clone())
    }

    #[doc(hidden)]
    pub fn reset_span_timings() {
        init_tracing();
        SPAN_TIMINGS.with(|totals| totals.borrow_mut().clear());
    }

    pub use tracing::{debug, info_span};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use std::{collections::BTreeMap, time::Duration};

    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    #[doc(hidden)]
    pub fn span_timings() -> BTreeMap<&'static str, (Duration, usize)> {
        BTreeMap::new()
    }

    #[doc(hidden)]
    pub fn reset_span_timings() {
        // No-op when tracing is disabled
    }

    #[doc(hidden)]
    #[macro_export]
    macro_rules! __noop_info_span {
        ($($args:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    #[doc(hidden)]
    #[macro_export]
    macro_rules! __noop_event {
        ($($args:tt)*) => {{}};
    }

    pub use crate::{__noop_event as debug, __noop_info_span as info_span};

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
