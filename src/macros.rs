/// Builds a [`Tuple`](crate::Tuple) from `name` and `name = value` literals.
///
/// ```rust
/// use cfg2::tuple;
///
/// let t = tuple!["method" = "key", "file" = "./my_key.pem", "trust"];
/// assert_eq!(t.primary_key(), "method");
/// assert_eq!(t.attributes()[2].value(), None);
/// ```
#[macro_export]
macro_rules! tuple {
    (@value) => {
        ::core::option::Option::None::<&str>
    };

    (@value $value:literal) => {
        ::core::option::Option::Some($value)
    };

    ($first:literal $(= $first_value:literal)? $(, $name:literal $(= $value:literal)?)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut tuple = $crate::Tuple::new($crate::Attribute::new(
            $first,
            $crate::tuple!(@value $($first_value)?),
        ));
        $(
            tuple.push($crate::Attribute::new($name, $crate::tuple!(@value $($value)?)));
        )*
        tuple
    }};
}

/// Builds a [`Record`](crate::Record) from bracketed [`tuple!`] bodies.
///
/// The first group becomes the unindented tuple.
///
/// ```rust
/// use cfg2::record;
///
/// let r = record![
///     ["creds"],
///     ["user" = "alice"],
///     ["method" = "key", "file" = "./my_key.pem"],
/// ];
/// assert_eq!(r.primary_key(), "creds");
/// assert_eq!(r.len(), 3);
/// ```
#[macro_export]
macro_rules! record {
    ([ $($first:tt)+ ] $(, [ $($rest:tt)+ ])* $(,)?) => {{
        #[allow(unused_mut)]
        let mut record = $crate::Record::new($crate::tuple!($($first)+));
        $(
            record.push($crate::tuple!($($rest)+));
        )*
        record
    }};
}
