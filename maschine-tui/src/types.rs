/// A Farcaster profile as relayed by the search proxy.
pub use neynar::User as Profile;
