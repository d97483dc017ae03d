mod test_resource;
