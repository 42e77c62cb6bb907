//! Literal construction of attribute structures.

/// Build an [`AttrValue`](crate::AttrValue) from literal syntax.
///
/// - `{ name: value, "text" => value }` builds a mapping. `name:` entries get
///   identifier-form keys, `"text" =>` entries get text-form keys.
/// - `[a, b]` builds a sequence.
/// - `nil` builds [`AttrValue::Nil`](crate::AttrValue::Nil).
/// - Any other expression goes through `AttrValue::from`.
///
/// # Examples
///
/// ```rust
/// use html_attrs::{AttrKey, AttrValue, attrs};
///
/// let value = attrs!({
///     class: "btn btn-primary",
///     data: { controller: "tooltip", count: 3 },
///     "aria-label" => "Save",
///     targets: ["a", "b"],
///     title: nil,
/// });
///
/// let map = value.as_map().expect("literal is a map");
/// assert_eq!(map.len(), 5);
/// assert!(map.contains_key(&AttrKey::text("aria-label")));
/// assert_eq!(map.get(&AttrKey::name("title")), Some(&AttrValue::Nil));
/// ```
#[macro_export]
macro_rules! attrs {
    (@map $map:ident) => {};
    (@map $map:ident $key:ident : $($rest:tt)*) => {
        $crate::attrs!(@entry $map ($crate::AttrKey::name(stringify!($key))) () $($rest)*);
    };
    (@map $map:ident $key:literal => $($rest:tt)*) => {
        $crate::attrs!(@entry $map ($crate::AttrKey::text($key)) () $($rest)*);
    };

    (@entry $map:ident ($key:expr) ($($value:tt)+) , $($rest:tt)*) => {
        $map.insert($key, $crate::attrs!($($value)+));
        $crate::attrs!(@map $map $($rest)*);
    };
    (@entry $map:ident ($key:expr) ($($value:tt)+)) => {
        $map.insert($key, $crate::attrs!($($value)+));
    };
    (@entry $map:ident ($key:expr) ($($value:tt)*) $next:tt $($rest:tt)*) => {
        $crate::attrs!(@entry $map ($key) ($($value)* $next) $($rest)*);
    };

    (@list [$($done:expr,)*] ()) => {
        ::std::vec![$($done,)*]
    };
    (@list [$($done:expr,)*] ($($value:tt)+)) => {
        ::std::vec![$($done,)* $crate::attrs!($($value)+)]
    };
    (@list [$($done:expr,)*] ($($value:tt)+) , $($rest:tt)*) => {
        $crate::attrs!(@list [$($done,)* $crate::attrs!($($value)+),] () $($rest)*)
    };
    (@list [$($done:expr,)*] ($($value:tt)*) $next:tt $($rest:tt)*) => {
        $crate::attrs!(@list [$($done,)*] ($($value)* $next) $($rest)*)
    };

    (nil) => {
        $crate::AttrValue::Nil
    };
    ({}) => {
        $crate::AttrValue::Map($crate::AttrMap::new())
    };
    ({ $($body:tt)+ }) => {{
        let mut map = $crate::AttrMap::new();
        $crate::attrs!(@map map $($body)+);
        $crate::AttrValue::Map(map)
    }};
    ([ $($body:tt)* ]) => {
        $crate::AttrValue::List($crate::attrs!(@list [] () $($body)*))
    };
    ($other:expr) => {
        $crate::AttrValue::from($other)
    };
}

/// Build an [`AttrMap`](crate::AttrMap) from the same literal syntax as
/// [`attrs!`](crate::attrs!), without the surrounding braces.
///
/// ```rust
/// use html_attrs::{AttrKey, attr_map};
///
/// let map = attr_map! { class: "card", "id" => "summary" };
/// assert!(map.contains_key(&AttrKey::text("id")));
/// ```
#[macro_export]
macro_rules! attr_map {
    () => {
        $crate::AttrMap::new()
    };
    ($($body:tt)+) => {{
        let mut map = $crate::AttrMap::new();
        $crate::attrs!(@map map $($body)+);
        map
    }};
}
