// SPDX-License-Identifier: Apache-2.0

//! Normalization and comparison of unified diffs.
//!
//! Two diffs are considered equal when they agree on their added and
//! removed lines. Context lines and hunk headers are ignored, so a
//! backport whose surrounding code shifted still compares clean; pure
//! reordering of unrelated hunks is not tolerated.

/// Outcome of comparing a backport diff against the upstream diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffVerdict {
	/// The diffs agree on all added and removed lines.
	Match,

	/// The diffs diverge. Both normalized forms are kept so a human can
	/// diff them directly.
	Mismatch { backport: String, upstream: String },

	/// One of the diffs could not be retrieved.
	FetchError { error: String },
}

/// Reduce a unified diff to its added and removed lines.
///
/// Keeps exactly the lines whose first character is `+` or `-`, in their
/// original order, joined with newlines.
pub fn normalize(diff: &str) -> String {
	diff.lines()
		.filter(|line| line.starts_with('+') || line.starts_with('-'))
		.collect::<Vec<_>>()
		.join("\n")
}

/// Compare two raw unified diffs on added/removed content only.
pub fn compare(backport: &str, upstream: &str) -> DiffVerdict {
	let backport = normalize(backport);
	let upstream = normalize(upstream);

	if backport == upstream {
		DiffVerdict::Match
	} else {
		DiffVerdict::Mismatch { backport, upstream }
	}
}

#[cfg(test)]
mod test {
	use super::*;

	const BACKPORT: &str = "\
diff --git a/src/lib.rs b/src/lib.rs
index 83db48f..bf269f4 100644
--- a/src/lib.rs
+++ b/src/lib.rs
@@ -10,7 +10,7 @@ fn frobnicate() {
 let x = 1;
-let y = 2;
+let y = 3;
 let z = 4;
";

	const UPSTREAM_SHIFTED: &str = "\
diff --git a/src/lib.rs b/src/lib.rs
index 1111111..2222222 100644
--- a/src/lib.rs
+++ b/src/lib.rs
@@ -42,8 +42,8 @@ fn frobnicate() {
 let w = 0;
 let x = 1;
-let y = 2;
+let y = 3;
 let z = 4;

";

	#[test]
	fn identical_diffs_match() {
		assert_eq!(compare(BACKPORT, BACKPORT), DiffVerdict::Match);
	}

	#[test]
	fn context_drift_still_matches() {
		// Shifted hunk offsets, a different blob index, an extra context
		// line, and a trailing blank line are all irrelevant.
		assert_eq!(compare(BACKPORT, UPSTREAM_SHIFTED), DiffVerdict::Match);
	}

	#[test]
	fn content_divergence_is_a_mismatch() {
		let upstream = UPSTREAM_SHIFTED.replace("+let y = 3;", "+let y = 5;");

		match compare(BACKPORT, &upstream) {
			DiffVerdict::Mismatch { backport, upstream } => {
				assert!(backport.contains("+let y = 3;"));
				assert!(upstream.contains("+let y = 5;"));
			}
			verdict => panic!("expected mismatch, got {:?}", verdict),
		}
	}

	#[test]
	fn normalize_keeps_original_order() {
		let normalized = normalize(BACKPORT);
		assert_eq!(
			normalized,
			"--- a/src/lib.rs\n+++ b/src/lib.rs\n-let y = 2;\n+let y = 3;"
		);
	}

	#[test]
	fn empty_diffs_match() {
		assert_eq!(compare("", ""), DiffVerdict::Match);
	}
}
