//! Extraction of the code payload from a markdown-formatted model reply.

/// Pull source code out of a model reply.
///
/// Collects every fenced block and returns the longest one, trimmed — the
/// full file rather than a short usage snippet. Replies without any fence
/// are returned whole when they plausibly are code, otherwise the result is
/// empty and the caller decides what to do with the raw reply.
pub fn extract_code(text: &str) -> String {
    let blocks = fenced_blocks(text);
    if let Some(best) = blocks.into_iter().max_by_key(|block| block.len()) {
        return best.trim().to_string();
    }
    if looks_like_code(text) {
        return text.to_string();
    }
    String::new()
}

/// All complete ``` fenced blocks; the fence lines (and any language tag on
/// the opening fence) are excluded. An unterminated fence is dropped.
fn fenced_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Option<String> = None;

    for line in text.lines() {
        if line.trim_start().starts_with("```") {
            match current.take() {
                Some(block) => blocks.push(block),
                None => current = Some(String::new()),
            }
            continue;
        }
        if let Some(block) = current.as_mut() {
            block.push_str(line);
            block.push('\n');
        }
    }

    blocks
}

fn looks_like_code(text: &str) -> bool {
    ["def ", "class ", "import ", "function "]
        .iter()
        .any(|marker| text.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_fenced_block_with_language_tag() {
        let reply = "Here you go:\n```python\nprint(1)\n```\nEnjoy!";
        assert_eq!(extract_code(reply), "print(1)");
    }

    #[test]
    fn test_extracts_fenced_block_without_language_tag() {
        let reply = "```\nlet x = 1;\n```";
        assert_eq!(extract_code(reply), "let x = 1;");
    }

    #[test]
    fn test_picks_the_longest_block() {
        let reply = "\
Usage:
```python
run()
```
Full file:
```python
def run():
    print(\"refactored\")

run()
```";
        let code = extract_code(reply);
        assert!(code.starts_with("def run():"));
        assert!(code.ends_with("run()"));
    }

    #[test]
    fn test_plain_code_without_fence_is_returned_whole() {
        let reply = "import os\n\ndef main():\n    pass\n";
        assert_eq!(extract_code(reply), reply);
    }

    #[test]
    fn test_chatter_without_code_yields_empty() {
        let reply = "Sorry, I cannot help with that.";
        assert_eq!(extract_code(reply), "");
    }

    #[test]
    fn test_unterminated_fence_falls_back_to_heuristic() {
        let reply = "```python\ndef main():\n    pass";
        // No closing fence, but the text clearly contains code.
        assert_eq!(extract_code(reply), reply);
    }

    #[test]
    fn test_block_is_trimmed() {
        let reply = "```js\n\nfunction f() {}\n\n```";
        assert_eq!(extract_code(reply), "function f() {}");
    }
}
