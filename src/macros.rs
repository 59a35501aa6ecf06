/// Builds a [`Value`](crate::Value) from literal-like Rust syntax.
///
/// `[..]` is a sequence, `(a, b)` a tuple, `{k: v}` a mapping, `True` and
/// `False` booleans; anything else goes through `Value::from`. Elements and
/// keys must be single token trees, so a negative number goes in a block:
/// `literal!([{ -1 }])`.
///
/// ```rust
/// use reprlit::{literal, parse};
///
/// let expected = literal!({"channels": [13, 15, 28], "pair": ("NBC", 45), "live": True});
/// assert_eq!(parse("{'channels': [13, 15, 28], 'pair': ('NBC', 45), 'live': True}"), expected);
/// ```
#[macro_export]
macro_rules! literal {
    (True) => {
        $crate::Value::Boolean(true)
    };

    (False) => {
        $crate::Value::Boolean(false)
    };

    ([]) => {
        $crate::Value::Sequence(::std::vec::Vec::new())
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Sequence(vec![$($crate::literal!($elem)),*])
    };

    (( $($elem:tt),* $(,)? )) => {
        $crate::Value::FixedTuple(vec![$($crate::literal!($elem)),*].into_boxed_slice())
    };

    ({}) => {
        $crate::Value::Mapping($crate::LiteralMap::new())
    };

    ({ $($key:tt : $value:tt),* $(,)? }) => {{
        let mut map = $crate::LiteralMap::new();
        $(
            map.insert($crate::Key::from($crate::literal!($key)), $crate::literal!($value));
        )*
        $crate::Value::Mapping(map)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}
