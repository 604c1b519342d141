mod encode_tests;
