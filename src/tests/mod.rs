mod test_hot_water;
