// Copyright 2024 Zenlink Contributors

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::errors::Error;

/// Hex-encodes a UTF-8 string for interpolation into a contract.
pub fn utf8_to_hex(text: &str) -> String {
    hex::encode(text.as_bytes())
}

/// Decodes a hex payload printed by the engine back into UTF-8.
pub fn hex_to_utf8(payload: &str) -> Result<String, Error> {
    let bytes = hex::decode(payload)?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_utf8() {
        let text = "Hello Wörld";
        assert_eq!(hex_to_utf8(&utf8_to_hex(text)).unwrap(), text);
    }

    #[test]
    fn rejects_bad_hex_and_bad_utf8() {
        assert!(matches!(hex_to_utf8("zz"), Err(Error::HexPayload(_))));
        assert!(matches!(hex_to_utf8("ff"), Err(Error::Utf8Payload(_))));
    }
}
