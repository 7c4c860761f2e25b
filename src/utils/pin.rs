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

/// Digital root of `n`: the single digit reached by repeatedly summing
/// decimal digits. Zero stays zero.
pub fn digital_root(n: u32) -> u32 {
    if n == 0 {
        0
    } else {
        (n - 1) % 9 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_to_a_single_digit() {
        assert_eq!(digital_root(0), 0);
        assert_eq!(digital_root(9), 9);
        assert_eq!(digital_root(10), 1);
        assert_eq!(digital_root(65), 2); // 'A'
        assert_eq!(digital_root(99), 9);
        assert_eq!(digital_root(12345), digital_root(1 + 2 + 3 + 4 + 5));
    }
}
