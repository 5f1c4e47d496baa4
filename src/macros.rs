#[macro_export]
macro_rules! intent {
    (
        tag: $tag:expr,
        topic: $topic:expr
        $(, required_phrases: [ $($req_phrase:expr),* $(,)? ])?
        $(, optional_phrases: [ $($opt_phrase:expr),* $(,)? ])?
        , response: $response:expr
        $(,)?
    ) => {{
        $crate::Rule {
            tag: $tag,
            topic: $topic,
            required_phrases: &[ $($($req_phrase),*)? ],
            optional_phrases: &[ $($($opt_phrase),*)? ],
            response: $response,
        }
    }};
}
