mod allowlist;
