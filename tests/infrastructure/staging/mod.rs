mod temp_file_stager_test;
