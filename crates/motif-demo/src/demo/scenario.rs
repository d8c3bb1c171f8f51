use super::config::RequestKind;
use anyhow::Context;
use motif::{
    ChainBuilder, Dispatch, Label, Queue, Request, RequestHandling, Router, Stylable, ThemeKind,
};
use std::time::SystemTime;

/// Enqueues `values`, walks them once with the borrowing iterator, then drains
/// the queue. Returns the drained values.
pub fn run_queue(values: &[i64]) -> Vec<i64> {
    let mut queue = Queue::with_capacity(values.len());
    for &value in values {
        queue.enqueue(value);
    }
    tracing::info!(len = queue.len(), front = ?queue.peek(), "queue filled");

    for value in &queue {
        tracing::info!("{value}");
    }

    let mut drained = Vec::with_capacity(queue.len());
    while let Some(value) = queue.dequeue() {
        drained.push(value);
    }
    drained
}

/// Sends one request of `kind` down a `SystemTime -> String -> Vec<u8>` chain.
pub fn run_chain(kind: RequestKind) -> anyhow::Result<Dispatch> {
    let chain = ChainBuilder::new()
        .accept::<SystemTime>()
        .accept::<String>()
        .accept::<Vec<u8>>()
        .on_unhandled(|request| {
            tracing::warn!(request = request.type_name(), "nobody took the request");
        })
        .build()
        .context("chain has no links")?;

    Ok(send(kind, |request| chain.handle(request)))
}

/// Sends one request of `kind` through a router holding the chain's types.
pub fn run_router(kind: RequestKind) -> anyhow::Result<Dispatch> {
    let mut router = Router::new();
    router
        .accept::<SystemTime>()?
        .accept::<String>()?
        .accept::<Vec<u8>>()?
        .on_unhandled(|request| {
            tracing::warn!(request = request.type_name(), "no route matched");
        });

    Ok(send(kind, |request| router.handle(request)))
}

/// Styles a fresh label with each theme in turn, returning a snapshot after
/// every application.
pub fn run_themes(text: &str, themes: &[ThemeKind]) -> Vec<Label> {
    let mut label = Label::new(text);
    themes
        .iter()
        .map(|kind| {
            let theme = kind.create();
            label.apply_theme(theme.as_ref());
            tracing::info!(
                theme = theme.name(),
                background = %label.background_color(),
                text = %label.text_color(),
                "styled {:?}",
                label.text(),
            );
            label.clone()
        })
        .collect()
}

fn send(kind: RequestKind, handle: impl Fn(&Request<'_>) -> Dispatch) -> Dispatch {
    match kind {
        RequestKind::Date => handle(&Request::new(&SystemTime::now())),
        RequestKind::String => handle(&Request::new(&String::from("hello"))),
        RequestKind::Data => handle(&Request::new(&vec![0_u8; 10])),
        RequestKind::Int => handle(&Request::new(&42_i64)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use motif::Color;

    #[test]
    fn queue_drains_in_fifo_order() {
        let values = [1, 2, 3, 4, 5, 9108, 10482, 5, 2, 2, 5, 2];
        assert_eq!(run_queue(&values), values);
        assert!(run_queue(&[]).is_empty());
    }

    #[test]
    fn chain_forwards_until_a_type_matches() {
        assert_eq!(run_chain(RequestKind::Date).unwrap().hops(), 0);
        assert_eq!(
            run_chain(RequestKind::String).unwrap(),
            Dispatch::Handled {
                handler: core::any::type_name::<String>(),
                hops: 1,
            }
        );
        assert_eq!(run_chain(RequestKind::Data).unwrap().hops(), 2);
        assert_eq!(
            run_chain(RequestKind::Int).unwrap(),
            Dispatch::Unhandled { hops: 2 }
        );
    }

    #[test]
    fn router_agrees_with_chain_without_hops() {
        for kind in [
            RequestKind::Date,
            RequestKind::String,
            RequestKind::Data,
            RequestKind::Int,
        ] {
            let by_chain = run_chain(kind).unwrap();
            let by_router = run_router(kind).unwrap();
            assert_eq!(by_chain.handler(), by_router.handler(), "{kind:?}");
            assert_eq!(by_router.hops(), 0);
        }
    }

    #[test]
    fn themes_are_applied_in_order() {
        let labels = run_themes("What It Smell Like", &ThemeKind::ALL);
        let colors: Vec<_> = labels
            .iter()
            .map(|label| (label.background_color(), label.text_color()))
            .collect();
        assert_eq!(
            colors,
            [
                (Color::WHITE, Color::BLACK),
                (Color::BLACK, Color::WHITE),
                (Color::BROWN, Color::WHITE),
            ]
        );
        assert!(labels.iter().all(|label| label.text() == "What It Smell Like"));
    }
}
