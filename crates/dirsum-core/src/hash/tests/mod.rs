mod tests_algorithm;
