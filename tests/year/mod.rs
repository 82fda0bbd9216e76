mod every_day_in_range_gets_a_commit;
