use proc_macro::TokenStream;

mod router_macro;

/// Declare a route list whose paths are checked at compile time.
///
/// Expands to an array of `(&'static str, T)` pairs in declaration order, so
/// it can initialise a `const`. Compilation fails if a path does not start
/// with `/`, contains whitespace, or appears twice.
///
/// # Example
///
/// ```rust,ignore
/// const ROUTES: [(&str, Page); 2] = ballot::routes! {
///     "/" => Page::Home,
///     "/voting" => Page::Voting,
/// };
/// ```
#[proc_macro]
pub fn routes(input: TokenStream) -> TokenStream {
    router_macro::routes_impl(input)
}
