/// Component scanner states, visited in address order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Locate the hash, query and path boundaries
    Start,
    /// `user[:pass]@` before the host
    Credentials,
    /// Host, including any `:port` suffix
    Host,
    /// Trailing `:<digits>` of the host
    Port,
    /// Path, up to the query or hash
    Path,
    /// Query, from the first `?` up to the hash
    Query,
    /// Fragment, from the first `#`
    Hash,
    /// Every component has been carved out
    Done,
}
