/*!
Translation between Chicken text and MiniChicken, its compact numeric
encoding.

Each line of Chicken text carries a single number: how many times the word
`chicken` appears in it, ignoring case. MiniChicken writes those numbers down
directly, separated by whitespace. Encoding is lossy (everything that isn't
`chicken` is dropped), while decoding regenerates a canonical Chicken text in
which every line is `chicken` repeated the right number of times.

```
let mini = chicken::encode("chicken chicken\nChickenChicken\n");
assert_eq!(mini, "2 2");

let text = chicken::decode("2 0 1").unwrap();
assert_eq!(text, "chicken chicken\n\nchicken");
```
*/

pub use crate::decode::{decode, decode_line};
pub use crate::encode::{count_chicken, encode, Encoder};
pub use crate::error::{Error, Result};

/// The only word that carries meaning in Chicken text.
const WORD: &str = "chicken";

/// We don't produce decoded text bigger than what can fit in a u32.
const MAX_DECODE_SIZE: u64 = ::std::u32::MAX as u64;

mod decode;
mod encode;
mod error;
