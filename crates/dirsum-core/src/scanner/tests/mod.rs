mod tests_issue;
