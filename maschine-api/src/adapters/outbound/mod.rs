mod neynar;

pub use self::neynar::NeynarAdapter;
