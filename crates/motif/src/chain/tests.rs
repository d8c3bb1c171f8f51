use crate::{
    ChainBuilder, Dispatch, Error, Handler, Request, RequestHandling, Router, chain::ShortName,
};
use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::{vec, vec::Vec};
use core::any::type_name;
use core::cell::{Cell, RefCell};

#[derive(Debug)]
struct Date {
    seconds: u64,
}

#[derive(Debug)]
struct Data(Vec<u8>);

/// Per-type invocation counters shared with handler actions.
#[derive(Clone, Default)]
struct Counters {
    date: Rc<Cell<usize>>,
    string: Rc<Cell<usize>>,
    data: Rc<Cell<usize>>,
    unhandled: Rc<RefCell<Vec<&'static str>>>,
}

impl Counters {
    fn snapshot(&self) -> (usize, usize, usize, usize) {
        (
            self.date.get(),
            self.string.get(),
            self.data.get(),
            self.unhandled.borrow().len(),
        )
    }
}

fn bump(cell: &Rc<Cell<usize>>) -> impl Fn() + 'static {
    let cell = cell.clone();
    move || cell.set(cell.get() + 1)
}

/// Date -> String -> Data, as in the classic responder chain sample.
fn date_string_data(counters: &Counters) -> Box<dyn RequestHandling> {
    let date = bump(&counters.date);
    let string = bump(&counters.string);
    let data = bump(&counters.data);
    let unhandled = counters.unhandled.clone();

    ChainBuilder::new()
        .accept_with(move |_: &Date| date())
        .accept_with(move |_: &String| string())
        .accept_with(move |_: &Data| data())
        .on_unhandled(move |request| unhandled.borrow_mut().push(request.type_name()))
        .build()
        .expect("three links")
}

#[test]
fn string_request_reaches_string_handler_only() {
    let counters = Counters::default();
    let chain = date_string_data(&counters);

    let dispatch = chain.dispatch(&String::from("hello"));

    assert_eq!(
        dispatch,
        Dispatch::Handled {
            handler: type_name::<String>(),
            hops: 1,
        }
    );
    assert_eq!(counters.snapshot(), (0, 1, 0, 0));
}

#[test]
fn int_request_is_reported_unhandled_exactly_once() {
    let counters = Counters::default();
    let chain = date_string_data(&counters);

    let dispatch = chain.dispatch(&42_i32);

    assert_eq!(dispatch, Dispatch::Unhandled { hops: 2 });
    assert!(!dispatch.is_handled());
    assert_eq!(dispatch.handler(), None);
    assert_eq!(counters.snapshot(), (0, 0, 0, 1));
    assert_eq!(*counters.unhandled.borrow(), vec![type_name::<i32>()]);
}

#[test]
fn first_and_last_links_resolve_with_expected_hops() {
    let counters = Counters::default();
    let chain = date_string_data(&counters);

    assert_eq!(chain.dispatch(&Date { seconds: 0 }).hops(), 0);
    assert_eq!(chain.dispatch(&Data(vec![0; 10])).hops(), 2);
    assert_eq!(counters.snapshot(), (1, 0, 1, 0));
}

#[test]
fn actions_receive_the_request_value() {
    let seen = Rc::new(Cell::new(0));
    let sink = seen.clone();
    let chain = ChainBuilder::new()
        .accept_with(move |date: &Date| sink.set(date.seconds))
        .build()
        .expect("one link");

    chain.dispatch(&Date { seconds: 1_700_000 });
    assert_eq!(seen.get(), 1_700_000);
}

#[test]
fn first_matching_type_wins() {
    let hits = Rc::new(RefCell::new(Vec::new()));
    let (first, second) = (hits.clone(), hits.clone());
    let chain = ChainBuilder::new()
        .accept_with(move |_: &u8| first.borrow_mut().push("first"))
        .accept_with(move |_: &u8| second.borrow_mut().push("second"))
        .build()
        .expect("two links");

    assert_eq!(chain.dispatch(&1_u8).hops(), 0);
    assert_eq!(*hits.borrow(), ["first"]);
}

#[test]
fn handlers_link_by_hand() {
    let data = Handler::<Data>::terminal();
    let string = Handler::<String>::new(Some(data.boxed()));
    let date = Handler::<Date>::new(Some(string.boxed())).boxed();

    assert_eq!(date.len(), 3, "Date -> String -> Data");
    assert_eq!(date.dispatch(&String::new()).hops(), 1);
    assert_eq!(date.dispatch(&()), Dispatch::Unhandled { hops: 2 });
}

#[test]
fn on_unhandled_only_fires_at_the_end() {
    let fired = Rc::new(Cell::new(0));
    let counter = fired.clone();
    let tail = Handler::<u16>::terminal();
    let head = Handler::<u8>::new(Some(tail.boxed()))
        .on_unhandled(move |_| counter.set(counter.get() + 1));

    // The head has a successor, so its callback never runs.
    assert!(!head.dispatch(&"nope").is_handled());
    assert_eq!(fired.get(), 0);

    let fired_tail = Rc::new(Cell::new(0));
    let counter = fired_tail.clone();
    let lone = Handler::<u8>::terminal().on_unhandled(move |_| counter.set(counter.get() + 1));
    assert!(!lone.dispatch(&"nope").is_handled());
    assert_eq!(fired_tail.get(), 1);
}

#[test]
fn chain_walk_lists_accepted_types_in_order() {
    let chain = date_string_data(&Counters::default());
    let accepted: Vec<_> = chain.links().map(|link| link.accepts()).collect();

    assert_eq!(
        accepted,
        [type_name::<Date>(), type_name::<String>(), type_name::<Data>()]
    );
    assert_eq!(chain.len(), 3);
}

#[test]
fn empty_builder_builds_nothing() {
    let builder = ChainBuilder::new();
    assert!(builder.is_empty());
    assert!(builder.build().is_none());
}

/// A custom link that accepts any even `u32` and forwards the rest.
struct Even {
    next: Option<Box<dyn RequestHandling>>,
}

impl RequestHandling for Even {
    fn accepts(&self) -> &'static str {
        "even u32"
    }

    fn handle(&self, request: &Request<'_>) -> Dispatch {
        match (request.downcast_ref::<u32>(), &self.next) {
            (Some(n), _) if n % 2 == 0 => Dispatch::Handled {
                handler: self.accepts(),
                hops: 0,
            },
            (_, Some(next)) => next.handle(request).forwarded(),
            (_, None) => Dispatch::Unhandled { hops: 0 },
        }
    }

    fn successor(&self) -> Option<&dyn RequestHandling> {
        self.next.as_deref()
    }
}

#[test]
fn custom_links_mix_with_typed_handlers() {
    let chain = ChainBuilder::new()
        .link(|next| Box::new(Even { next }))
        .accept::<u32>()
        .build()
        .expect("two links");

    assert_eq!(chain.dispatch(&4_u32).handler(), Some("even u32"));
    assert_eq!(
        chain.dispatch(&5_u32),
        Dispatch::Handled {
            handler: type_name::<u32>(),
            hops: 1,
        }
    );
    assert_eq!(chain.len(), 2);
}

#[test]
fn handler_display_uses_short_type_names() {
    assert_eq!(format!("{}", Handler::<String>::terminal()), "String handler");
    assert_eq!(
        format!("{}", Handler::<Vec<Option<String>>>::terminal()),
        "Vec<Option<String>> handler"
    );
    assert_eq!(format!("{}", ShortName(type_name::<(u8, &str)>())), "(u8, &str)");
    assert_eq!(format!("{}", ShortName(type_name::<[Date; 2]>())), "[Date; 2]");
}

#[test]
fn handler_debug_names_successor() {
    let handler = Handler::<u8>::new(Some(Handler::<u16>::terminal().boxed()));
    let debug = format!("{handler:?}");
    assert!(debug.contains("accepts: \"u8\""), "{debug}");
    assert!(debug.contains("next: Some(\"u16\")"), "{debug}");
}

#[test]
fn request_exposes_type_and_value() {
    let value = 3_i64;
    let request = Request::new(&value);
    assert!(request.is::<i64>());
    assert!(!request.is::<i32>());
    assert_eq!(request.type_id(), core::any::TypeId::of::<i64>());
    assert_eq!(request.downcast_ref::<i64>(), Some(&3));
    assert_eq!(request.type_name(), "i64");
}

fn dispatch_both<R: core::any::Any>(
    chain: &dyn RequestHandling,
    router: &Router,
    request: &R,
) -> (Dispatch, Dispatch) {
    (chain.dispatch(request), router.dispatch(request))
}

#[test]
fn router_resolves_like_the_chain() {
    let counters = Counters::default();
    let chain = date_string_data(&counters);

    let router_counters = Counters::default();
    let (date, string, data) = (
        bump(&router_counters.date),
        bump(&router_counters.string),
        bump(&router_counters.data),
    );
    let unhandled = router_counters.unhandled.clone();
    let mut router = Router::new();
    router.route(move |_: &Date| date()).expect("date route");
    router.route(move |_: &String| string()).expect("string route");
    router.route(move |_: &Data| data()).expect("data route");
    router.on_unhandled(move |request| unhandled.borrow_mut().push(request.type_name()));

    let outcomes = [
        dispatch_both(chain.as_ref(), &router, &Date { seconds: 1 }),
        dispatch_both(chain.as_ref(), &router, &String::from("s")),
        dispatch_both(chain.as_ref(), &router, &Data(vec![1, 2])),
        dispatch_both(chain.as_ref(), &router, &7_i32),
    ];
    for (by_chain, by_router) in outcomes {
        assert_eq!(by_chain.handler(), by_router.handler());
        assert_eq!(by_router.hops(), 0);
    }
    assert_eq!(counters.snapshot(), router_counters.snapshot());
    assert_eq!(router_counters.snapshot(), (1, 1, 1, 1));
}

#[test]
fn router_rejects_duplicates_and_keeps_first_route() {
    let hits = Rc::new(RefCell::new(Vec::new()));
    let (first, second) = (hits.clone(), hits.clone());

    let mut router = Router::new();
    router
        .route(move |_: &u8| first.borrow_mut().push("first"))
        .expect("first route");
    let err = router
        .route(move |_: &u8| second.borrow_mut().push("second"))
        .map(|_| ())
        .unwrap_err();

    assert_eq!(
        err,
        Error::DuplicateRoute {
            type_name: type_name::<u8>()
        }
    );
    assert_eq!(router.len(), 1);
    assert!(router.contains::<u8>());
    assert!(!router.contains::<u16>());

    router.dispatch(&9_u8);
    assert_eq!(*hits.borrow(), ["first"]);
}

#[test]
fn empty_router_reports_everything_unhandled() {
    let router = Router::new();
    assert!(router.is_empty());
    assert_eq!(router.dispatch(&"x"), Dispatch::Unhandled { hops: 0 });
}
