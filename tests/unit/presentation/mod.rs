mod test_account;
