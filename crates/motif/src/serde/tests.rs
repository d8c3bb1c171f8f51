use crate::{Color, Queue, ThemeKind};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Palette {
    kind: ThemeKind,
    #[serde(with = "crate::as_hex")]
    accent: Color,
    pending: Queue<String>,
}

#[test]
fn queue_serializes_in_fifo_order() {
    let mut queue: Queue<u32> = [10, 20, 30].into_iter().collect();
    queue.dequeue();
    queue.enqueue(40);
    assert_eq!(serde_json::to_string(&queue).unwrap(), "[20,30,40]");
}

#[test]
fn queue_deserializes_from_any_array() {
    let mut queue: Queue<i32> = serde_json::from_str("[3, 1, 2]").unwrap();
    queue.assert_links();
    assert_eq!(queue.dequeue(), Some(3));
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), [1, 2]);

    let empty: Queue<i32> = serde_json::from_str("[]").unwrap();
    assert!(empty.is_empty());
    assert!(serde_json::from_str::<Queue<i32>>("{}").is_err());
}

#[test]
fn palette_round_trips() {
    let palette = Palette {
        kind: ThemeKind::Brown,
        accent: Color::rgba(0x99, 0x66, 0x33, 0x80),
        pending: ["a", "b"].iter().map(|s| s.to_string()).collect(),
    };
    let json = serde_json::to_string(&palette).unwrap();
    assert_eq!(
        json,
        r##"{"kind":"brown","accent":"#99663380","pending":["a","b"]}"##
    );
    assert_eq!(serde_json::from_str::<Palette>(&json).unwrap(), palette);
}

#[test]
fn bad_color_string_fails_to_deserialize() {
    let err = serde_json::from_str::<Palette>(
        r##"{"kind":"light","accent":"#12","pending":[]}"##,
    )
    .unwrap_err();
    assert!(err.to_string().contains("invalid color `#12`"), "{err}");
}

#[test]
fn unknown_theme_kind_fails_to_deserialize() {
    assert!(
        serde_json::from_str::<Palette>(r##"{"kind":"sepia","accent":"#000000","pending":[]}"##)
            .is_err()
    );
}
